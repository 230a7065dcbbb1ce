use crate::adapters::http::{endpoint, error_detail};
use crate::core::{Catalog, CatalogArtist, PlaylistHandle, TrackId};
use crate::utils::error::{Result, ShowtextError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// The Web API rejects more URIs than this in one tracks request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    artists: ArtistPage,
}

#[derive(Debug, Deserialize)]
struct ArtistPage {
    #[serde(default)]
    items: Vec<CatalogArtist>,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    #[serde(default)]
    tracks: Vec<TrackObject>,
}

#[derive(Debug, Deserialize)]
struct TrackObject {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistObject {
    id: String,
    uri: String,
    #[serde(default)]
    external_urls: HashMap<String, String>,
}

impl From<PlaylistObject> for PlaylistHandle {
    fn from(playlist: PlaylistObject) -> Self {
        let link = playlist
            .external_urls
            .get("spotify")
            .cloned()
            .or_else(|| playlist.external_urls.values().next().cloned())
            .unwrap_or_else(|| format!("https://open.spotify.com/playlist/{}", playlist.id));

        Self {
            id: playlist.id,
            uri: playlist.uri,
            link,
        }
    }
}

/// Spotify Web API client. Token acquisition happens outside this crate.
pub struct SpotifyCatalog {
    client: Client,
    base_url: String,
    token: String,
    market: String,
}

impl SpotifyCatalog {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
            market: market.into(),
        }
    }

    async fn execute(&self, operation: &str, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ShowtextError::publish(operation, e))?;

        tracing::debug!("Catalog {} status: {}", operation, response.status());

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ShowtextError::publish(operation, error_detail(response).await))
        }
    }

    async fn write_tracks(
        &self,
        operation: &str,
        method: reqwest::Method,
        playlist_id: &str,
        tracks: &[TrackId],
    ) -> Result<()> {
        let url = endpoint(&self.base_url, &["v1", "playlists", playlist_id, "tracks"])?;
        let uris: Vec<String> = tracks.iter().map(TrackId::uri).collect();
        let request = self
            .client
            .request(method, url)
            .json(&json!({ "uris": uris }));
        self.execute(operation, request).await?;
        Ok(())
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn search_artists(&self, name: &str) -> Result<Vec<CatalogArtist>> {
        let url = endpoint(&self.base_url, &["v1", "search"])?;
        let query = format!("artist:{}", name);
        let request = self
            .client
            .get(url)
            .query(&[("q", query.as_str()), ("type", "artist")]);

        let response = self.execute("search", request).await?;
        let page: SearchResponse = response
            .json()
            .await
            .map_err(|e| ShowtextError::publish("search", e))?;

        Ok(page.artists.items)
    }

    async fn top_tracks(&self, artist_id: &str) -> Result<Vec<TrackId>> {
        let url = endpoint(&self.base_url, &["v1", "artists", artist_id, "top-tracks"])?;
        let request = self
            .client
            .get(url)
            .query(&[("market", self.market.as_str())]);

        let response = self.execute("top-tracks", request).await?;
        let top: TopTracksResponse = response
            .json()
            .await
            .map_err(|e| ShowtextError::publish("top-tracks", e))?;

        Ok(top.tracks.iter().map(|t| TrackId::from_uri(&t.uri)).collect())
    }

    async fn create_playlist(&self, user: &str, name: &str) -> Result<PlaylistHandle> {
        let url = endpoint(&self.base_url, &["v1", "users", user, "playlists"])?;
        let request = self
            .client
            .post(url)
            .json(&json!({ "name": name, "public": true }));

        let response = self.execute("create-playlist", request).await?;
        let playlist: PlaylistObject = response
            .json()
            .await
            .map_err(|e| ShowtextError::publish("create-playlist", e))?;

        Ok(playlist.into())
    }

    async fn replace_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()> {
        let mut chunks = tracks.chunks(MAX_TRACKS_PER_REQUEST);

        // PUT with an empty list clears the playlist.
        let first = chunks.next().unwrap_or(&[]);
        self.write_tracks("replace-tracks", reqwest::Method::PUT, playlist_id, first)
            .await?;

        for chunk in chunks {
            self.write_tracks("replace-tracks", reqwest::Method::POST, playlist_id, chunk)
                .await?;
        }
        Ok(())
    }

    async fn playlist(&self, playlist_id: &str) -> Result<PlaylistHandle> {
        let url = endpoint(&self.base_url, &["v1", "playlists", playlist_id])?;
        let request = self
            .client
            .get(url)
            .query(&[("fields", "id,uri,external_urls")]);

        let response = self.execute("get-playlist", request).await?;
        let playlist: PlaylistObject = response
            .json()
            .await
            .map_err(|e| ShowtextError::publish("get-playlist", e))?;

        Ok(playlist.into())
    }

    async fn add_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()> {
        if tracks.is_empty() {
            tracing::debug!("No tracks to add to playlist {}", playlist_id);
            return Ok(());
        }

        for chunk in tracks.chunks(MAX_TRACKS_PER_REQUEST) {
            self.write_tracks("add-tracks", reqwest::Method::POST, playlist_id, chunk)
                .await?;
        }
        Ok(())
    }
}
