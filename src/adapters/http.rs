use crate::utils::error::{Result, ShowtextError};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ERROR_BODY: usize = 200;

/// One client per run, shared by every adapter.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("showtext/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ShowtextError::config(format!("cannot build HTTP client: {}", e)))
}

/// Appends path segments to `base`, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| ShowtextError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base.to_string(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| ShowtextError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Best-effort description of a failed response. Both the catalog and the SMS API
/// put a `message` in their JSON error bodies.
pub async fn error_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .or_else(|| json.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    match message {
        Some(message) => format!("HTTP {}: {}", status, message),
        None if body.trim().is_empty() => format!("HTTP {}", status),
        None => {
            let snippet: String = body.chars().take(MAX_ERROR_BODY).collect();
            format!("HTTP {}: {}", status, snippet.trim())
        }
    }
}
