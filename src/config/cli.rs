use super::{
    DEFAULT_CATALOG_BASE_URL, DEFAULT_PLAYLIST_ID, DEFAULT_PLAYLIST_NAME, DEFAULT_SCHEDULE_URL,
    DEFAULT_SMS_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "showtext")]
#[command(about = "Texts tonight's venue lineup with a playlist of the artists' top tracks")]
pub struct CliConfig {
    /// Path to the SMS credentials file (JSON, or TOML with a .toml extension)
    #[arg(long = "twil", alias = "credentials")]
    pub credentials: PathBuf,

    /// Catalog user that owns the playlist
    #[arg(long = "user-name", alias = "user_name")]
    pub user_name: String,

    /// Bearer token for the catalog API
    #[arg(long, env = "SPOTIFY_TOKEN", hide_env_values = true)]
    pub catalog_token: String,

    #[arg(long, default_value = DEFAULT_PLAYLIST_ID)]
    pub playlist_id: String,

    /// Create a new playlist instead of replacing the tracks of --playlist-id
    #[arg(long)]
    pub new_playlist: bool,

    #[arg(long, default_value = DEFAULT_PLAYLIST_NAME)]
    pub playlist_name: String,

    #[arg(long, default_value = DEFAULT_SCHEDULE_URL)]
    pub schedule_url: String,

    #[arg(long, default_value = DEFAULT_CATALOG_BASE_URL)]
    pub catalog_base_url: String,

    #[arg(long, default_value = DEFAULT_SMS_BASE_URL)]
    pub sms_base_url: String,

    /// Market used for top-track lookups
    #[arg(long, default_value = "US")]
    pub market: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Build the message without publishing the playlist or sending the text
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn schedule_url(&self) -> &str {
        &self.schedule_url
    }

    fn catalog_base_url(&self) -> &str {
        &self.catalog_base_url
    }

    fn sms_base_url(&self) -> &str {
        &self.sms_base_url
    }

    fn user_name(&self) -> &str {
        &self.user_name
    }

    fn playlist_id(&self) -> Option<&str> {
        if self.new_playlist {
            None
        } else {
            Some(&self.playlist_id)
        }
    }

    fn playlist_name(&self) -> &str {
        &self.playlist_name
    }

    fn market(&self) -> &str {
        &self.market
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("schedule_url", &self.schedule_url)?;
        validate_url("catalog_base_url", &self.catalog_base_url)?;
        validate_url("sms_base_url", &self.sms_base_url)?;
        validate_non_empty_string("user_name", &self.user_name)?;
        validate_non_empty_string("catalog_token", &self.catalog_token)?;
        validate_non_empty_string("playlist_name", &self.playlist_name)?;
        if !self.new_playlist {
            validate_non_empty_string("playlist_id", &self.playlist_id)?;
        }
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
