use crate::utils::error::{RateError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use url::Url;

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(RateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 包裹尺寸與重量必須大於零
pub fn validate_positive_decimal(field_name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(RateError::ValidationError {
            message: format!("{} must be positive, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_currency_code(field_name: &str, value: &str) -> Result<()> {
    if !CURRENCY_CODE.is_match(value) {
        return Err(RateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Currency must be a three-letter uppercase ISO 4217 code".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gateway.endpoint", "https://onlinetools.ups.com/json/Rate").is_ok());
        assert!(validate_url("gateway.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("gateway.endpoint", "").is_err());
        assert!(validate_url("gateway.endpoint", "invalid-url").is_err());
        assert!(validate_url("gateway.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("gateway.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("gateway.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_decimal() {
        assert!(validate_positive_decimal("weight", Decimal::new(5, 1)).is_ok());
        assert!(validate_positive_decimal("weight", Decimal::ZERO).is_err());
        assert!(validate_positive_decimal("weight", Decimal::from(-2)).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("units.currency", "USD").is_ok());
        assert!(validate_currency_code("units.currency", "BRL").is_ok());
        assert!(validate_currency_code("units.currency", "usd").is_err());
        assert!(validate_currency_code("units.currency", "US").is_err());
        assert!(validate_currency_code("units.currency", "DOLLAR").is_err());
    }
}
