use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Successful rate answer as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRateResponse {
    #[serde(rename = "Response")]
    pub response: ResponseHeader,
    #[serde(rename = "RatedShipment", deserialize_with = "one_or_many", default)]
    pub rated_shipments: Vec<RatedShipment>,
}

impl RawRateResponse {
    pub fn status_description(&self) -> &str {
        &self.response.response_status.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "ResponseStatus")]
    pub response_status: ResponseStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatedShipment {
    pub service: ServiceCode,
    pub total_charges: Charge,
    #[serde(default)]
    pub negotiated_rate_charges: Option<NegotiatedRateCharges>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceCode {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charge {
    #[serde(default)]
    pub currency_code: String,
    pub monetary_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NegotiatedRateCharges {
    pub total_charge: Charge,
}

// 承運商只回一筆時給物件，多筆時給陣列
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}
