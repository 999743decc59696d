use crate::utils::error::{MenuError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MenuError::InvalidUrl {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MenuError::InvalidUrl {
                field: field_name.to_string(),
                reason: format!("unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MenuError::InvalidUrl {
            field: field_name.to_string(),
            reason: format!("invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MenuError::InvalidProfile {
            field: field_name.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Day tokens are compared against lowercased markup text, so an uppercase
/// letter in the profile would make the token unmatchable.
pub fn validate_lowercase(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty(field_name, value)?;
    if value.chars().any(|c| c.is_uppercase()) {
        return Err(MenuError::InvalidProfile {
            field: field_name.to_string(),
            reason: format!("token `{}` must be lowercase", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("menu_url", "https://example.com").is_ok());
        assert!(validate_url("menu_url", "http://example.com").is_ok());
        assert!(validate_url("menu_url", "").is_err());
        assert!(validate_url("menu_url", "not-a-url").is_err());
        assert!(validate_url("menu_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_lowercase() {
        assert!(validate_lowercase("day_tokens.monday", "lundi").is_ok());
        assert!(validate_lowercase("day_tokens.monday", "Lundi").is_err());
        assert!(validate_lowercase("day_tokens.monday", "").is_err());
    }
}
