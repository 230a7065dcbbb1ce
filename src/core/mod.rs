pub mod engine;
pub mod message;
pub mod pipeline;
pub mod playlist;
pub mod schedule;

pub use crate::domain::model::{
    CatalogArtist, Delivery, Listing, ListingBlock, PlaylistDraft, PlaylistHandle, Schedule,
    SmsReceipt, TrackId,
};
pub use crate::domain::ports::{Catalog, ConfigProvider, Notifier, Pipeline, ScheduleSource};
pub use crate::utils::error::Result;
