use crate::core::catalog::DEFAULT_SERVICE_CODE;
use crate::core::country::{normalize_country, state_applies};
use crate::domain::model::{Address, Credentials, Package};
use crate::domain::shipment::{
    CodeDescription, DeclaredValue, DeliveryConfirmation, Dimensions, PackageEntry,
    PackageServiceOptions, PackageWeight, Packaging, Party, ReferenceNumber, ShipmentRatingOptions,
    ShipmentRequest, WireAddress,
};
use crate::utils::error::{RateError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// Carrier limit for party names.
pub const MAX_NAME_LENGTH: usize = 35;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "KGS")]
    Kgs,
    #[serde(rename = "LBS")]
    Lbs,
}

impl WeightUnit {
    pub fn code(self) -> &'static str {
        match self {
            Self::Kgs => "KGS",
            Self::Lbs => "LBS",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    #[default]
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "IN")]
    In,
}

impl DimensionUnit {
    pub fn code(self) -> &'static str {
        match self {
            Self::Cm => "CM",
            Self::In => "IN",
        }
    }
}

/// Unit systems applied to every package in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub weight: WeightUnit,
    pub dimension: DimensionUnit,
    pub currency: String,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            weight: WeightUnit::Kgs,
            dimension: DimensionUnit::Cm,
            currency: "USD".to_string(),
        }
    }
}

/// Which carrier schema the built packages must follow.
///
/// The rate schema names the packaging field `PackagingType` and has no
/// package reference numbers; the ship schema uses `Packaging` and accepts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSchema {
    #[default]
    Rate,
    Ship,
}

impl PackageSchema {
    pub fn packaging(self, code: &str) -> Packaging {
        match self {
            Self::Rate => Packaging::PackagingType(CodeDescription::new(code)),
            Self::Ship => Packaging::Packaging(CodeDescription::new(code)),
        }
    }

    pub fn supports_reference_numbers(self) -> bool {
        matches!(self, Self::Ship)
    }
}

/// Capabilities and fixed selectors used while building a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    pub schema: PackageSchema,
    /// Service pinned on the shipment. Always Worldwide Expedited unless configured,
    /// even for shop requests.
    pub service_code: String,
    pub reference_numbers: bool,
    pub delivery_confirmation: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            schema: PackageSchema::Rate,
            service_code: DEFAULT_SERVICE_CODE.to_string(),
            reference_numbers: true,
            delivery_confirmation: true,
        }
    }
}

impl BuilderOptions {
    fn attach_references(&self) -> bool {
        self.reference_numbers && self.schema.supports_reference_numbers()
    }
}

/// Builds the carrier shipment for one rate call.
///
/// Package order is preserved. Fails only when required input is missing, which
/// callers must check before any network I/O.
pub fn build_shipment_request(
    packages: &[Package],
    shipper: &Address,
    recipient: &Address,
    packaging_type: &str,
    units: &UnitsConfig,
    credentials: &Credentials,
    options: &BuilderOptions,
) -> Result<ShipmentRequest> {
    validate_shipment_input(packages, shipper, recipient)?;

    let package = packages
        .iter()
        .map(|p| build_package(p, packaging_type, units, options))
        .collect();

    let shipper_party = Party {
        name: display_name(shipper),
        shipper_number: Some(credentials.shipper_number.clone()),
        address: build_address(shipper, false),
    };
    let ship_to = Party {
        name: display_name(recipient),
        shipper_number: None,
        address: build_address(recipient, recipient.is_residence),
    };

    tracing::debug!(
        packages = packages.len(),
        shipper_country = %shipper_party.address.country_code,
        recipient_country = %ship_to.address.country_code,
        service = %options.service_code,
        "Built shipment request"
    );

    Ok(ShipmentRequest {
        shipper: shipper_party,
        ship_to,
        package,
        service: CodeDescription::described(options.service_code.clone(), "Service Code"),
        shipment_rating_options: ShipmentRatingOptions::default(),
        shipment_service_options: String::new(),
    })
}

pub fn validate_shipment_input(
    packages: &[Package],
    shipper: &Address,
    recipient: &Address,
) -> Result<()> {
    if packages.is_empty() {
        return Err(RateError::validation("at least one package is required"));
    }
    for (i, package) in packages.iter().enumerate() {
        package.validate().map_err(|e| match e {
            RateError::ValidationError { message } => {
                RateError::validation(format!("package {}: {}", i + 1, message))
            }
            other => other,
        })?;
    }
    shipper
        .validate()
        .map_err(|_| RateError::validation("shipper address is missing its country"))?;
    recipient
        .validate()
        .map_err(|_| RateError::validation("recipient address is missing its country"))?;
    Ok(())
}

fn build_package(
    package: &Package,
    packaging_type: &str,
    units: &UnitsConfig,
    options: &BuilderOptions,
) -> PackageEntry {
    let mut service_options = PackageServiceOptions::default();

    if options.delivery_confirmation {
        if let Some(requirement) = package.require_signature {
            service_options.delivery_confirmation = Some(DeliveryConfirmation {
                dcis_type: requirement.dcis_type().to_string(),
            });
        }
    }

    if let Some(value) = package.declared_value() {
        service_options.declared_value = Some(DeclaredValue {
            currency_code: units.currency.clone(),
            monetary_value: value,
        });
    }

    let mut reference_number = Vec::new();
    if let Some(reference) = package.reference.as_deref().filter(|r| !r.is_empty()) {
        if options.attach_references() {
            reference_number.push(ReferenceNumber {
                value: reference.to_string(),
            });
        } else {
            tracing::debug!("Skipping package reference not supported by the active schema");
        }
    }

    PackageEntry {
        packaging: options.schema.packaging(packaging_type),
        dimensions: Dimensions {
            unit_of_measurement: CodeDescription::new(units.dimension.code()),
            length: package.length,
            width: package.width,
            height: package.height,
        },
        package_weight: PackageWeight {
            unit_of_measurement: CodeDescription::new(units.weight.code()),
            weight: package.weight,
        },
        package_service_options: service_options,
        reference_number,
    }
}

fn build_address(address: &Address, residential: bool) -> WireAddress {
    let country_code = normalize_country(&address.country);
    let state_province_code = state_applies(&country_code).then(|| address.state.clone());

    WireAddress {
        address_line: vec![address.address1.clone(), address.address2.clone()],
        city: address.city.clone(),
        state_province_code,
        postal_code: address.postal_code.clone(),
        country_code,
        residential_address_indicator: residential.then(String::new),
    }
}

/// Company name when set, otherwise the personal name, cut to the carrier limit.
pub fn display_name(address: &Address) -> String {
    let name = address
        .company_name
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(&address.name);
    truncate(name, MAX_NAME_LENGTH)
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
