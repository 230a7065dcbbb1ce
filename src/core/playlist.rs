use crate::core::{Catalog, CatalogArtist, ConfigProvider, PlaylistHandle, TrackId};
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Top tracks kept per matched artist.
pub const TRACKS_PER_ARTIST: usize = 5;

fn annotation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\(closing set\)").expect("valid annotation regex"))
}

/// Lower-cased artist name with the `(closing set)` note removed.
pub fn clean_artist_name(raw: &str) -> String {
    let stripped = annotation_pattern().replace_all(raw, "");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First candidate whose name equals `cleaned_name`, ignoring case.
pub fn find_exact_match<'a>(
    cleaned_name: &str,
    candidates: &'a [CatalogArtist],
) -> Option<&'a CatalogArtist> {
    candidates
        .iter()
        .find(|candidate| candidate.name.to_lowercase() == cleaned_name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSelection {
    pub tracks: Vec<TrackId>,
    pub matched: Vec<String>,
    pub skipped: Vec<String>,
}

/// Gathers top tracks for the first night's performers. Artists without an exact
/// catalog match are skipped, not reported as errors.
pub async fn build_track_list<C: Catalog + ?Sized>(
    catalog: &C,
    performers: &[Vec<String>],
) -> Result<TrackSelection> {
    let mut selection = TrackSelection::default();

    let Some(first_night) = performers.first() else {
        tracing::warn!("No show nights listed, playlist will be empty");
        return Ok(selection);
    };

    for performer in first_night {
        let name = clean_artist_name(performer);
        if name.is_empty() {
            selection.skipped.push(performer.clone());
            continue;
        }

        let candidates = catalog.search_artists(&name).await?;
        let Some(artist) = find_exact_match(&name, &candidates) else {
            tracing::info!("No exact catalog match for '{}', skipping", performer);
            selection.skipped.push(performer.clone());
            continue;
        };

        let top = catalog.top_tracks(&artist.id).await?;
        let taken: Vec<TrackId> = top.into_iter().take(TRACKS_PER_ARTIST).collect();
        tracing::debug!(
            "Matched '{}' to {}, taking tracks [{}]",
            performer,
            artist.id,
            taken
                .iter()
                .map(TrackId::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        selection.tracks.extend(taken);
        selection.matched.push(performer.clone());
    }

    Ok(selection)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub user: String,
    pub playlist_id: Option<String>,
    pub playlist_name: String,
}

impl PublishTarget {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            user: config.user_name().to_string(),
            playlist_id: config.playlist_id().map(str::to_string),
            playlist_name: config.playlist_name().to_string(),
        }
    }
}

/// Creates the playlist, or replaces the contents of the existing one, then adds
/// `tracks`. The add runs after both branches, so a freshly created playlist
/// receives the tracks exactly once and a replaced one receives them twice.
pub async fn publish_playlist<C: Catalog + ?Sized>(
    catalog: &C,
    target: &PublishTarget,
    tracks: &[TrackId],
) -> Result<PlaylistHandle> {
    let handle = match &target.playlist_id {
        None => {
            tracing::info!(
                "Creating playlist '{}' for {}",
                target.playlist_name,
                target.user
            );
            catalog
                .create_playlist(&target.user, &target.playlist_name)
                .await?
        }
        Some(playlist_id) => {
            tracing::info!("Replacing tracks of playlist {}", playlist_id);
            catalog.replace_tracks(playlist_id, tracks).await?;
            catalog.playlist(playlist_id).await?
        }
    };

    catalog.add_tracks(&handle.id, tracks).await?;

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShowtextError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn artist(id: &str, name: &str) -> CatalogArtist {
        CatalogArtist {
            id: id.to_string(),
            name: name.to_string(),
            uri: format!("spotify:artist:{}", id),
        }
    }

    #[derive(Default)]
    struct FakeCatalog {
        search_results: HashMap<String, Vec<CatalogArtist>>,
        top: HashMap<String, Vec<TrackId>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeCatalog {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn search_artists(&self, name: &str) -> Result<Vec<CatalogArtist>> {
            self.record(format!("search:{}", name));
            Ok(self.search_results.get(name).cloned().unwrap_or_default())
        }

        async fn top_tracks(&self, artist_id: &str) -> Result<Vec<TrackId>> {
            self.record(format!("top:{}", artist_id));
            self.top
                .get(artist_id)
                .cloned()
                .ok_or_else(|| ShowtextError::publish("top-tracks", "unknown artist"))
        }

        async fn create_playlist(&self, user: &str, name: &str) -> Result<PlaylistHandle> {
            self.record(format!("create:{}:{}", user, name));
            Ok(PlaylistHandle {
                id: "new".to_string(),
                uri: "spotify:playlist:new".to_string(),
                link: "https://open.spotify.com/playlist/new".to_string(),
            })
        }

        async fn replace_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()> {
            self.record(format!("replace:{}:{}", playlist_id, tracks.len()));
            Ok(())
        }

        async fn playlist(&self, playlist_id: &str) -> Result<PlaylistHandle> {
            self.record(format!("get:{}", playlist_id));
            Ok(PlaylistHandle {
                id: playlist_id.to_string(),
                uri: format!("spotify:playlist:{}", playlist_id),
                link: format!("https://open.spotify.com/playlist/{}", playlist_id),
            })
        }

        async fn add_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()> {
            self.record(format!("add:{}:{}", playlist_id, tracks.len()));
            Ok(())
        }
    }

    fn tracks(prefix: &str, n: usize) -> Vec<TrackId> {
        (1..=n).map(|i| TrackId::new(format!("{}{}", prefix, i))).collect()
    }

    #[test]
    fn test_clean_artist_name() {
        assert_eq!(clean_artist_name("DJ Shadow (closing set)"), "dj shadow");
        assert_eq!(clean_artist_name("DJ Shadow (Closing Set)"), "dj shadow");
        assert_eq!(clean_artist_name("  Anderson .Paak "), "anderson .paak");
    }

    #[test]
    fn test_exact_match_is_case_insensitive_but_exact() {
        let candidates = vec![artist("trio", "Foo Bar Trio"), artist("fb", "foo bar")];
        let found = find_exact_match(&clean_artist_name("Foo Bar"), &candidates).unwrap();
        assert_eq!(found.id, "fb");

        let only_trio = vec![artist("trio", "Foo Bar Trio")];
        assert!(find_exact_match("foo bar", &only_trio).is_none());
    }

    #[test]
    fn test_exact_match_first_wins() {
        let candidates = vec![artist("one", "Foo Bar"), artist("two", "FOO BAR")];
        assert_eq!(find_exact_match("foo bar", &candidates).unwrap().id, "one");
    }

    #[tokio::test]
    async fn test_build_caps_tracks_and_skips_unmatched() {
        let mut catalog = FakeCatalog::default();
        catalog
            .search_results
            .insert("anderson .paak".to_string(), vec![artist("ap", "Anderson .Paak")]);
        catalog
            .search_results
            .insert("dj shadow".to_string(), vec![artist("x", "DJ Shadow Live")]);
        catalog.top.insert("ap".to_string(), tracks("t", 8));

        let performers = vec![
            vec!["Anderson .Paak".to_string(), "DJ Shadow (closing set)".to_string()],
            vec!["Second Night Band".to_string()],
        ];

        let selection = build_track_list(&catalog, &performers).await.unwrap();

        assert_eq!(selection.tracks, tracks("t", 5));
        assert_eq!(selection.matched, vec!["Anderson .Paak"]);
        assert_eq!(selection.skipped, vec!["DJ Shadow (closing set)"]);
        assert_eq!(
            catalog.calls(),
            vec!["search:anderson .paak", "top:ap", "search:dj shadow"]
        );
    }

    #[tokio::test]
    async fn test_build_keeps_duplicates_in_order() {
        let mut catalog = FakeCatalog::default();
        catalog
            .search_results
            .insert("echo".to_string(), vec![artist("e", "Echo")]);
        catalog.top.insert("e".to_string(), tracks("e", 2));

        let performers = vec![vec!["Echo".to_string(), "ECHO".to_string()]];
        let selection = build_track_list(&catalog, &performers).await.unwrap();

        let ids: Vec<&str> = selection.tracks.iter().map(TrackId::as_str).collect();
        assert_eq!(ids, vec!["e1", "e2", "e1", "e2"]);
    }

    #[tokio::test]
    async fn test_build_with_no_nights_is_empty() {
        let catalog = FakeCatalog::default();
        let selection = build_track_list(&catalog, &[]).await.unwrap();
        assert!(selection.tracks.is_empty());
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_publish_creates_when_no_playlist_id() {
        let catalog = FakeCatalog::default();
        let target = PublishTarget {
            user: "alice".to_string(),
            playlist_id: None,
            playlist_name: "Tonight".to_string(),
        };

        let handle = publish_playlist(&catalog, &target, &tracks("t", 3)).await.unwrap();

        assert_eq!(handle.link, "https://open.spotify.com/playlist/new");
        assert_eq!(catalog.calls(), vec!["create:alice:Tonight", "add:new:3"]);
    }

    #[tokio::test]
    async fn test_publish_replaces_then_adds_for_existing_playlist() {
        let catalog = FakeCatalog::default();
        let target = PublishTarget {
            user: "alice".to_string(),
            playlist_id: Some("fixed".to_string()),
            playlist_name: "Tonight".to_string(),
        };

        let handle = publish_playlist(&catalog, &target, &tracks("t", 2)).await.unwrap();

        assert_eq!(handle.id, "fixed");
        assert_eq!(
            catalog.calls(),
            vec!["replace:fixed:2", "get:fixed", "add:fixed:2"]
        );
    }
}
