use crate::core::message::compose_message;
use crate::core::playlist::{build_track_list, publish_playlist, PublishTarget};
use crate::core::schedule::extract_schedule;
use crate::core::{
    Catalog, Delivery, Notifier, Pipeline, PlaylistDraft, Schedule, ScheduleSource,
};
use crate::utils::error::Result;

/// Venue schedule in, playlist plus text message out.
pub struct ShowtextPipeline<S: ScheduleSource, C: Catalog, N: Notifier> {
    source: S,
    catalog: C,
    notifier: N,
    target: PublishTarget,
}

impl<S: ScheduleSource, C: Catalog, N: Notifier> ShowtextPipeline<S, C, N> {
    pub fn new(source: S, catalog: C, notifier: N, target: PublishTarget) -> Self {
        Self {
            source,
            catalog,
            notifier,
            target,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[async_trait::async_trait]
impl<S: ScheduleSource, C: Catalog, N: Notifier> Pipeline for ShowtextPipeline<S, C, N> {
    async fn extract(&self) -> Result<Schedule> {
        let blocks = self.source.fetch_listing_blocks().await?;
        let schedule = extract_schedule(&blocks)?;

        for listing in &schedule.listings {
            tracing::debug!("{}: {} performers", listing.date, listing.performers.len());
        }
        Ok(schedule)
    }

    async fn transform(&self, schedule: Schedule) -> Result<PlaylistDraft> {
        let selection = build_track_list(&self.catalog, &schedule.performers()).await?;

        Ok(PlaylistDraft {
            schedule,
            tracks: selection.tracks,
            matched: selection.matched,
            skipped: selection.skipped,
        })
    }

    async fn load(&self, draft: PlaylistDraft) -> Result<Delivery> {
        let playlist = publish_playlist(&self.catalog, &self.target, &draft.tracks).await?;
        tracing::info!("Playlist ready: {}", playlist.link);

        let (dates, performers) = draft.schedule.split();
        let message = compose_message(&dates, &performers, &playlist.link);

        let receipt = self.notifier.send(&message).await?;
        tracing::info!("SMS accepted with sid {}", receipt.sid);

        Ok(Delivery {
            playlist,
            message,
            receipt,
            track_count: draft.tracks.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogArtist, ListingBlock, PlaylistHandle, SmsReceipt, TrackId};
    use crate::utils::error::ShowtextError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticSource(Vec<ListingBlock>);

    #[async_trait]
    impl ScheduleSource for StaticSource {
        async fn fetch_listing_blocks(&self) -> Result<Vec<ListingBlock>> {
            Ok(self.0.clone())
        }
    }

    struct OneArtistCatalog;

    #[async_trait]
    impl Catalog for OneArtistCatalog {
        async fn search_artists(&self, name: &str) -> Result<Vec<CatalogArtist>> {
            Ok(vec![CatalogArtist {
                id: "a1".to_string(),
                name: if name == "alpha" { "Alpha" } else { "Someone Else" }.to_string(),
                uri: "spotify:artist:a1".to_string(),
            }])
        }

        async fn top_tracks(&self, _artist_id: &str) -> Result<Vec<TrackId>> {
            Ok(vec![TrackId::new("t1"), TrackId::new("t2")])
        }

        async fn create_playlist(&self, _user: &str, _name: &str) -> Result<PlaylistHandle> {
            Ok(PlaylistHandle {
                id: "p".to_string(),
                uri: "spotify:playlist:p".to_string(),
                link: "https://open.spotify.com/playlist/p".to_string(),
            })
        }

        async fn replace_tracks(&self, _playlist_id: &str, _tracks: &[TrackId]) -> Result<()> {
            Err(ShowtextError::publish("replace-tracks", "not expected"))
        }

        async fn playlist(&self, _playlist_id: &str) -> Result<PlaylistHandle> {
            Err(ShowtextError::publish("get-playlist", "not expected"))
        }

        async fn add_tracks(&self, _playlist_id: &str, _tracks: &[TrackId]) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, body: &str) -> Result<SmsReceipt> {
            self.sent.lock().unwrap().push(body.to_string());
            Ok(SmsReceipt {
                sid: "SM1".to_string(),
                status: Some("queued".to_string()),
            })
        }
    }

    fn pipeline() -> ShowtextPipeline<StaticSource, OneArtistCatalog, RecordingNotifier> {
        let blocks = vec![
            ListingBlock(
                r#"<div class="list-view-item"><h2 class="dates">Fri 6/1</h2><h1>Alpha</h1><h1>Beta</h1></div>"#
                    .to_string(),
            ),
            ListingBlock(
                r#"<div class="list-view-item"><h2 class="dates">Sat 6/2</h2><h1>Gamma</h1></div>"#
                    .to_string(),
            ),
        ];

        ShowtextPipeline::new(
            StaticSource(blocks),
            OneArtistCatalog,
            RecordingNotifier::default(),
            PublishTarget {
                user: "alice".to_string(),
                playlist_id: None,
                playlist_name: "Tonight".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let pipeline = pipeline();

        let schedule = pipeline.extract().await.unwrap();
        assert_eq!(schedule.dates(), vec!["Fri 6/1", "Sat 6/2"]);

        let draft = pipeline.transform(schedule).await.unwrap();
        assert_eq!(draft.tracks.len(), 2);
        assert_eq!(draft.matched, vec!["Alpha"]);
        assert_eq!(draft.skipped, vec!["Beta"]);

        let delivery = pipeline.load(draft).await.unwrap();
        assert_eq!(delivery.track_count, 2);
        assert_eq!(
            delivery.message,
            "Fri 6/1:\nAlpha\nBeta\n\nSat 6/2:\nGamma\n\nhttps://open.spotify.com/playlist/p"
        );

        let sent = pipeline.notifier().sent.lock().unwrap().clone();
        assert_eq!(sent, vec![delivery.message.clone()]);
    }
}
