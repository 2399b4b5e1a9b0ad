use crate::utils::error::{ProxyError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static ENDPOINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(/[A-Za-z0-9_-]+)*$").expect("endpoint pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ProxyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Upstream resource names are path segments of `[A-Za-z0-9_-]` joined by `/`.
pub fn validate_endpoint_name(endpoint: &str) -> Result<()> {
    if ENDPOINT_PATTERN.is_match(endpoint) {
        Ok(())
    } else {
        Err(ProxyError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        })
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ProxyError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Secrets are never echoed back in the error.
pub fn validate_non_empty_secret(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
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
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "https://api.loyverse.com/v1.0").is_ok());
        assert!(validate_url("api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "invalid-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint_name() {
        assert!(validate_endpoint_name("items").is_ok());
        assert!(validate_endpoint_name("pos_devices").is_ok());
        assert!(validate_endpoint_name("modifier-groups").is_ok());
        assert!(validate_endpoint_name("items/1f6c3a5e-0b7d-4a3e-9d1e-2f0a8b7c6d5e").is_ok());

        assert!(validate_endpoint_name("").is_err());
        assert!(validate_endpoint_name("../admin").is_err());
        assert!(validate_endpoint_name("items/").is_err());
        assert!(validate_endpoint_name("items//variants").is_err());
        assert!(validate_endpoint_name("items?limit=1").is_err());
        assert!(validate_endpoint_name("https://evil.example").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("token".to_string());
        let missing: Option<String> = None;

        assert_eq!(validate_required_field("api_token", &present).unwrap(), "token");
        assert!(matches!(
            validate_required_field("api_token", &missing),
            Err(ProxyError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_secret_hides_value() {
        assert!(validate_non_empty_secret("api_token", "abc").is_ok());

        match validate_non_empty_secret("api_token", "   ") {
            Err(ProxyError::InvalidConfigValueError { value, .. }) => assert!(value.is_empty()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("port", 3000u16, 1, u16::MAX).is_ok());
        assert!(validate_range("port", 0u16, 1, u16::MAX).is_err());
    }
}
