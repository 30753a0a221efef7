pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::HttpRateGateway;
pub use crate::config::{ClientConfig, ShipmentFile};
pub use crate::core::builder::{
    build_shipment_request, BuilderOptions, DimensionUnit, PackageSchema, UnitsConfig, WeightUnit,
};
pub use crate::core::country::{normalize_country, state_applies};
pub use crate::core::fault::translate_fault;
pub use crate::core::normalizer::normalize_rates;
pub use crate::core::rater::RateClient;
pub use crate::domain::model::{
    Address, Credentials, Package, RateQuote, RateReport, SignatureRequirement,
};
pub use crate::utils::error::{CarrierError, RateError, Result};
