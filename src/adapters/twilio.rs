use crate::adapters::http::{endpoint, error_detail};
use crate::config::Credentials;
use crate::core::{Notifier, SmsReceipt};
use crate::utils::error::{Result, ShowtextError};
use async_trait::async_trait;
use reqwest::Client;

/// Sends texts through the Twilio Messages resource.
pub struct TwilioNotifier {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl TwilioNotifier {
    pub fn new(client: Client, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            credentials,
        }
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, body: &str) -> Result<SmsReceipt> {
        let creds = &self.credentials;
        let url = endpoint(
            &self.base_url,
            &["2010-04-01", "Accounts", &creds.twilio_sid, "Messages.json"],
        )?;

        tracing::debug!(
            "Sending SMS ({} chars) from {} to {}",
            body.chars().count(),
            creds.twilio_phone,
            creds.your_phone
        );

        let response = self
            .client
            .post(url)
            .basic_auth(&creds.twilio_sid, Some(&creds.twilio_token))
            .form(&[
                ("To", creds.your_phone.as_str()),
                ("From", creds.twilio_phone.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(ShowtextError::notify)?;

        if !response.status().is_success() {
            return Err(ShowtextError::notify(error_detail(response).await));
        }

        response.json().await.map_err(ShowtextError::notify)
    }
}
