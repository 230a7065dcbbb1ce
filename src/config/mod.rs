#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;

pub use credentials::Credentials;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_SCHEDULE_URL: &str = "http://www.hotelutah.com/";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.spotify.com";
pub const DEFAULT_SMS_BASE_URL: &str = "https://api.twilio.com";
/// Playlist reused on every run unless `--new-playlist` is given.
pub const DEFAULT_PLAYLIST_ID: &str = "18Erws30stoHDl4aSfFVXU";
pub const DEFAULT_PLAYLIST_NAME: &str = "Hotel Utah Tonight";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
