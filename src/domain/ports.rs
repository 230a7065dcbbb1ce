use crate::domain::model::{
    CatalogArtist, Delivery, ListingBlock, PlaylistDraft, PlaylistHandle, Schedule, SmsReceipt,
    TrackId,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn schedule_url(&self) -> &str;
    fn catalog_base_url(&self) -> &str;
    fn sms_base_url(&self) -> &str;
    fn user_name(&self) -> &str;
    /// `None` means a fresh playlist is created.
    fn playlist_id(&self) -> Option<&str>;
    fn playlist_name(&self) -> &str;
    fn market(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Where the show listings come from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch_listing_blocks(&self) -> Result<Vec<ListingBlock>>;
}

/// The streaming catalog: search, top tracks and playlist writes.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search_artists(&self, name: &str) -> Result<Vec<CatalogArtist>>;
    async fn top_tracks(&self, artist_id: &str) -> Result<Vec<TrackId>>;
    async fn create_playlist(&self, user: &str, name: &str) -> Result<PlaylistHandle>;
    async fn replace_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()>;
    async fn playlist(&self, playlist_id: &str) -> Result<PlaylistHandle>;
    async fn add_tracks(&self, playlist_id: &str, tracks: &[TrackId]) -> Result<()>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, body: &str) -> Result<SmsReceipt>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Schedule>;
    async fn transform(&self, schedule: Schedule) -> Result<PlaylistDraft>;
    async fn load(&self, draft: PlaylistDraft) -> Result<Delivery>;
}
