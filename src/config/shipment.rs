use crate::core::builder::validate_shipment_input;
use crate::core::catalog::DEFAULT_PACKAGING_TYPE;
use crate::domain::model::{Address, Package};
use crate::utils::error::{RateError, Result};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::path::Path;

fn default_packaging_type() -> String {
    DEFAULT_PACKAGING_TYPE.to_string()
}

/// A shipment to be rated, as described in a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentFile {
    #[serde(default = "default_packaging_type")]
    pub packaging_type: String,
    pub shipper: Address,
    pub recipient: Address,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl ShipmentFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RateError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RateError::ConfigError {
            message: format!("shipment file parsing error: {}", e),
        })
    }
}

impl Validate for ShipmentFile {
    fn validate(&self) -> Result<()> {
        validate_shipment_input(&self.packages, &self.shipper, &self.recipient)
    }
}
