use crate::utils::error::{Result, ShowtextError};
use crate::utils::validation::{
    validate_non_empty_string, validate_phone_number, validate_sender_id, Validate,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// SMS account secrets. Keys match the JSON file the tool has always read.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub twilio_sid: String,
    pub twilio_token: String,
    #[serde(rename = "your_phone#")]
    pub your_phone: String,
    #[serde(rename = "twilio_phone#")]
    pub twilio_phone: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("twilio_sid", &self.twilio_sid)
            .field("twilio_token", &"<redacted>")
            .field("your_phone#", &self.your_phone)
            .field("twilio_phone#", &self.twilio_phone)
            .finish()
    }
}

impl Credentials {
    /// Loads credentials from disk. `.toml` files are read as TOML, everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShowtextError::config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let credentials = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        tracing::debug!("Loaded credentials from {}", path.display());
        Ok(credentials)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        serde_json::from_str(&processed)
            .map_err(|e| ShowtextError::config(format!("JSON parsing error: {}", e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed)
            .map_err(|e| ShowtextError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("twilio_sid", &self.twilio_sid)?;
        validate_non_empty_string("twilio_token", &self.twilio_token)?;
        validate_phone_number("your_phone#", &self.your_phone)?;
        validate_sender_id("twilio_phone#", &self.twilio_phone)?;
        Ok(())
    }
}
