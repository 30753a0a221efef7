// Wire-level shipment shape handed to the rate gateway.
// Field names follow the carrier's schema, optional parts are omitted entirely when unset.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDescription {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CodeDescription {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    pub fn described(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: Some(description.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireAddress {
    pub address_line: Vec<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province_code: Option<String>,
    pub postal_code: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_address_indicator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    pub name: String,
    /// Only the shipper carries the account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipper_number: Option<String>,
    pub address: WireAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    pub unit_of_measurement: CodeDescription,
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeight {
    pub unit_of_measurement: CodeDescription,
    pub weight: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryConfirmation {
    #[serde(rename = "DCISType")]
    pub dcis_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeclaredValue {
    pub currency_code: String,
    pub monetary_value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageServiceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_confirmation: Option<DeliveryConfirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<DeclaredValue>,
}

impl PackageServiceOptions {
    pub fn is_empty(&self) -> bool {
        self.delivery_confirmation.is_none() && self.declared_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferenceNumber {
    pub value: String,
}

/// The packaging code lives under a different key depending on the active schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Packaging {
    Packaging(CodeDescription),
    PackagingType(CodeDescription),
}

impl Packaging {
    pub fn code(&self) -> &str {
        match self {
            Self::Packaging(c) | Self::PackagingType(c) => &c.code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageEntry {
    #[serde(flatten)]
    pub packaging: Packaging,
    pub dimensions: Dimensions,
    pub package_weight: PackageWeight,
    #[serde(skip_serializing_if = "PackageServiceOptions::is_empty")]
    pub package_service_options: PackageServiceOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reference_number: Vec<ReferenceNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRatingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negotiated_rates_indicator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRequest {
    pub shipper: Party,
    pub ship_to: Party,
    pub package: Vec<PackageEntry>,
    pub service: CodeDescription,
    pub shipment_rating_options: ShipmentRatingOptions,
    pub shipment_service_options: String,
}
