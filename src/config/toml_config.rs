use crate::adapters::http::DEFAULT_RATE_ENDPOINT;
use crate::core::builder::{BuilderOptions, UnitsConfig};
use crate::domain::model::Credentials;
use crate::utils::error::{RateError, Result};
use crate::utils::validation::{
    validate_currency_code, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub credentials: Credentials,
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub request: BuilderOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("credentials.username", &self.credentials.username)?;
        validate_non_empty_string("credentials.password", &self.credentials.password)?;
        validate_non_empty_string(
            "credentials.access_license",
            &self.credentials.access_license,
        )?;
        validate_non_empty_string(
            "credentials.shipper_number",
            &self.credentials.shipper_number,
        )?;

        validate_currency_code("units.currency", &self.units.currency)?;

        validate_url("gateway.endpoint", &self.gateway.endpoint)?;
        validate_positive_number("gateway.timeout_seconds", self.gateway.timeout_seconds, 1)?;

        validate_non_empty_string("request.service_code", &self.request.service_code)?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${UPS_PASSWORD})
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RateError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let mut missing = Vec::new();
    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            missing.push(var_name.to_string());
            String::new()
        })
    });

    if let Some(field) = missing.into_iter().next() {
        return Err(RateError::MissingConfigError { field });
    }

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::{DimensionUnit, PackageSchema, WeightUnit};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[credentials]
username = "shipper"
password = "secret"
access_license = "ABC123"
shipper_number = "X1Y2Z3"
"#;

    #[test]
    fn test_defaults_apply() {
        let config = ClientConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.units.weight, WeightUnit::Kgs);
        assert_eq!(config.units.dimension, DimensionUnit::Cm);
        assert_eq!(config.units.currency, "USD");
        assert_eq!(config.gateway.endpoint, DEFAULT_RATE_ENDPOINT);
        assert_eq!(config.gateway.timeout(), Duration::from_secs(30));
        assert_eq!(config.request.service_code, "08");
        assert_eq!(config.request.schema, PackageSchema::Rate);
        assert!(config.request.reference_numbers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let toml_content = format!(
            r#"{}
[units]
weight = "LBS"
dimension = "IN"
currency = "BRL"

[gateway]
endpoint = "https://wwwcie.ups.com/json/Rate"
timeout_seconds = 10

[request]
schema = "ship"
service_code = "65"
reference_numbers = false
delivery_confirmation = false
"#,
            BASIC
        );

        let config = ClientConfig::from_toml_str(&toml_content).unwrap();

        assert_eq!(config.units.weight, WeightUnit::Lbs);
        assert_eq!(config.units.dimension, DimensionUnit::In);
        assert_eq!(config.request.schema, PackageSchema::Ship);
        assert_eq!(config.request.service_code, "65");
        assert!(!config.request.delivery_confirmation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let toml_content = format!("{}\n[units]\nweight = \"STONE\"\n", BASIC);
        assert!(ClientConfig::from_toml_str(&toml_content).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UPS_RATE_TEST_PASSWORD", "from-env");

        let toml_content = r#"
[credentials]
username = "shipper"
password = "${UPS_RATE_TEST_PASSWORD}"
access_license = "ABC123"
shipper_number = "X1Y2Z3"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.credentials.password, "from-env");

        std::env::remove_var("UPS_RATE_TEST_PASSWORD");
    }

    #[test]
    fn test_missing_env_var_is_reported() {
        let toml_content = r#"
[credentials]
username = "shipper"
password = "${UPS_RATE_TEST_UNSET_VARIABLE}"
access_license = "ABC123"
shipper_number = "X1Y2Z3"
"#;

        match ClientConfig::from_toml_str(toml_content) {
            Err(RateError::MissingConfigError { field }) => {
                assert_eq!(field, "UPS_RATE_TEST_UNSET_VARIABLE")
            }
            other => panic!("expected missing config, got {:?}", other),
        }
    }

    #[test]
    fn test_config_validation() {
        let toml_content = format!(
            "{}\n[gateway]\nendpoint = \"invalid-url\"\n\n[units]\ncurrency = \"usd\"\n",
            BASIC
        );

        let config = ClientConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.credentials.shipper_number, "X1Y2Z3");
    }
}
