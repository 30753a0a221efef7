pub mod builder;
pub mod catalog;
pub mod country;
pub mod fault;
pub mod normalizer;
pub mod rater;

pub use crate::domain::model::{Address, Credentials, Package, RateQuote, RateReport};
pub use crate::domain::ports::{GatewayError, RateGateway};
pub use crate::utils::error::Result;
