use crate::domain::model::Credentials;
use crate::domain::ports::{GatewayError, RateGateway};
use crate::domain::response::RawRateResponse;
use crate::domain::shipment::{CodeDescription, ShipmentRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_RATE_ENDPOINT: &str = "https://onlinetools.ups.com/json/Rate";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UsernameToken<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceAccessToken<'a> {
    access_license_number: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SecurityHeader<'a> {
    username_token: UsernameToken<'a>,
    service_access_token: ServiceAccessToken<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RequestOption {
    request_option: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RateRequest<'a> {
    request: RequestOption,
    pickup_type: &'a CodeDescription,
    customer_classification: &'a CodeDescription,
    shipment: &'a ShipmentRequest,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "UPSSecurity")]
    security: SecurityHeader<'a>,
    #[serde(rename = "RateRequest")]
    rate_request: RateRequest<'a>,
}

/// JSON-over-HTTPS binding of the carrier's rate service.
pub struct HttpRateGateway {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpRateGateway {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn envelope<'a>(
        &'a self,
        shipment: &'a ShipmentRequest,
        classification: &'a CodeDescription,
        pickup_type: &'a CodeDescription,
    ) -> Envelope<'a> {
        Envelope {
            security: SecurityHeader {
                username_token: UsernameToken {
                    username: &self.credentials.username,
                    password: &self.credentials.password,
                },
                service_access_token: ServiceAccessToken {
                    access_license_number: &self.credentials.access_license,
                },
            },
            rate_request: RateRequest {
                request: RequestOption {
                    request_option: "Shop",
                },
                pickup_type,
                customer_classification: classification,
                shipment,
            },
        }
    }
}

#[async_trait]
impl RateGateway for HttpRateGateway {
    async fn submit_rate_request(
        &self,
        shipment: &ShipmentRequest,
        classification: &CodeDescription,
        pickup_type: &CodeDescription,
    ) -> Result<RawRateResponse, GatewayError> {
        let envelope = self.envelope(shipment, classification, pickup_type);

        tracing::debug!("Making rate request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Rate response status: {}", status);
        let body = response.text().await?;

        decode_response(status.as_u16(), status.is_success(), &body)
    }
}

fn decode_response(
    status: u16,
    success: bool,
    body: &str,
) -> Result<RawRateResponse, GatewayError> {
    let mut document: serde_json::Value = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(_) if !success => {
            return Err(GatewayError::UnexpectedStatus {
                status,
                body: body.to_string(),
            })
        }
        Err(e) => return Err(GatewayError::Decode(e.to_string())),
    };

    // 承運商的 fault 可能伴隨 200 或 500 回傳
    if let Some(fault) = document.get_mut("Fault").map(serde_json::Value::take) {
        return Err(GatewayError::Fault(fault));
    }

    if !success {
        return Err(GatewayError::UnexpectedStatus {
            status,
            body: body.to_string(),
        });
    }

    let rate_response = document
        .get_mut("RateResponse")
        .map(serde_json::Value::take)
        .ok_or_else(|| GatewayError::Decode("response has no RateResponse element".to_string()))?;

    serde_json::from_value(rate_response).map_err(|e| GatewayError::Decode(e.to_string()))
}
