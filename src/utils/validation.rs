use crate::utils::error::{Result, ShowtextError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ShowtextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShowtextError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShowtextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowtextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShowtextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+[1-9][0-9]{6,14}$").expect("valid phone regex"))
}

/// E.164 numbers, which is what the SMS API expects for `To` and `From`.
pub fn validate_phone_number(field_name: &str, value: &str) -> Result<()> {
    if !phone_pattern().is_match(value.trim()) {
        return Err(ShowtextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Phone number must look like +15551234567".to_string(),
        });
    }
    Ok(())
}

fn short_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{3,8}$").expect("valid short code regex"))
}

fn alphanumeric_sender_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9 ]{1,11}$").expect("valid alphanumeric sender regex")
    })
}

/// Accepts what the SMS API takes for `From`: an E.164 number, a short code, or an
/// alphanumeric sender id of at most 11 characters with at least one letter.
pub fn validate_sender_id(field_name: &str, value: &str) -> Result<()> {
    let value = value.trim();
    let is_alphanumeric_id = alphanumeric_sender_pattern().is_match(value)
        && value.chars().any(|c| c.is_ascii_alphabetic());

    if phone_pattern().is_match(value) || short_code_pattern().is_match(value) || is_alphanumeric_id
    {
        return Ok(());
    }

    Err(ShowtextError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Sender must be an E.164 number, a short code or an alphanumeric id".to_string(),
    })
}
