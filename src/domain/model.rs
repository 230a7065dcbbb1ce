use serde::{Deserialize, Serialize};
use std::fmt;

/// Outer HTML of one show-night element on the venue page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingBlock(pub String);

impl ListingBlock {
    pub fn html(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub date: String,
    pub performers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub listings: Vec<Listing>,
}

impl Schedule {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn dates(&self) -> Vec<String> {
        self.listings.iter().map(|l| l.date.clone()).collect()
    }

    pub fn performers(&self) -> Vec<Vec<String>> {
        self.listings.iter().map(|l| l.performers.clone()).collect()
    }

    /// Index-aligned dates and performer lists.
    pub fn split(&self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.dates(), self.performers())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accepts either a bare id or a `spotify:track:<id>` URI.
    pub fn from_uri(uri: &str) -> Self {
        Self(uri.rsplit(':').next().unwrap_or(uri).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn uri(&self) -> String {
        format!("spotify:track:{}", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistHandle {
    pub id: String,
    pub uri: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub schedule: Schedule,
    pub tracks: Vec<TrackId>,
    pub matched: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsReceipt {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Delivery {
    pub playlist: PlaylistHandle,
    pub message: String,
    pub receipt: SmsReceipt,
    pub track_count: usize,
}
