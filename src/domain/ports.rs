use crate::domain::response::RawRateResponse;
use crate::domain::shipment::{CodeDescription, ShipmentRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`RateGateway`].
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The carrier rejected the request. Holds the fault document (the object
    /// whose `detail` carries the structured error tree).
    #[error("carrier fault")]
    Fault(serde_json::Value),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("undecodable carrier response: {0}")]
    Decode(String),
}

/// Remote carrier rating service. Owns transport, wire format and the security
/// header; the core only hands over the built shipment and selectors.
#[async_trait]
pub trait RateGateway: Send + Sync {
    async fn submit_rate_request(
        &self,
        shipment: &ShipmentRequest,
        classification: &CodeDescription,
        pickup_type: &CodeDescription,
    ) -> Result<RawRateResponse, GatewayError>;
}
