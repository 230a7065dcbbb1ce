pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{SpotifyCatalog, TwilioNotifier, VenuePage};
pub use config::Credentials;
pub use core::{engine::Engine, pipeline::ShowtextPipeline, playlist::PublishTarget};
pub use utils::error::{Result, ShowtextError};
