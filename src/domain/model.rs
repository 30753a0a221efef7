use crate::utils::error::{RateError, Result};
use crate::utils::validation::{validate_positive_decimal, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A postal address as supplied by the caller.
///
/// Values are kept exactly as given; carrier field limits (e.g. the 35 character
/// name limit) are applied when a request is built, so the same address can be
/// reused across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    /// Free text ("usa") or an ISO code ("BR").
    pub country: String,
    #[serde(default)]
    pub is_residence: bool,
}

impl Address {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Result<Self> {
        let address = Self {
            name: name.into(),
            company_name: None,
            address1: String::new(),
            address2: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: country.into(),
            is_residence: false,
        };
        address.validate()?;
        Ok(address)
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_lines(mut self, address1: impl Into<String>, address2: impl Into<String>) -> Self {
        self.address1 = address1.into();
        self.address2 = address2.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn residential(mut self) -> Self {
        self.is_residence = true;
        self
    }
}

impl Validate for Address {
    fn validate(&self) -> Result<()> {
        if self.country.trim().is_empty() {
            return Err(RateError::validation("address country is required"));
        }
        Ok(())
    }
}

/// Signature level requested for a package's delivery confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureRequirement {
    Signature,
    AdultSignature,
}

impl SignatureRequirement {
    /// Carrier `DCISType` code.
    pub fn dcis_type(self) -> &'static str {
        match self {
            Self::Signature => "2",
            Self::AdultSignature => "3",
        }
    }
}

/// A single parcel. Units come from [`crate::core::builder::UnitsConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    pub weight: Decimal,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub require_signature: Option<SignatureRequirement>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl Package {
    pub fn new(
        length: impl Into<Decimal>,
        width: impl Into<Decimal>,
        height: impl Into<Decimal>,
        weight: impl Into<Decimal>,
    ) -> Result<Self> {
        let package = Self {
            length: length.into(),
            width: width.into(),
            height: height.into(),
            weight: weight.into(),
            value: None,
            require_signature: None,
            reference: None,
        };
        package.validate()?;
        Ok(package)
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_signature(mut self, requirement: SignatureRequirement) -> Self {
        self.require_signature = Some(requirement);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// 申報價值為零視同未申報
    pub fn declared_value(&self) -> Option<Decimal> {
        self.value.filter(|v| !v.is_zero())
    }
}

impl Validate for Package {
    fn validate(&self) -> Result<()> {
        validate_positive_decimal("package length", self.length)?;
        validate_positive_decimal("package width", self.width)?;
        validate_positive_decimal("package height", self.height)?;
        validate_positive_decimal("package weight", self.weight)?;
        if let Some(value) = self.value {
            if value.is_sign_negative() {
                return Err(RateError::validation(format!(
                    "declared value cannot be negative, got {}",
                    value
                )));
            }
        }
        Ok(())
    }
}

/// Carrier account credentials.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub access_license: String,
    pub shipper_number: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("access_license", &"[REDACTED]")
            .field("shipper_number", &self.shipper_number)
            .finish()
    }
}

/// One carrier-offered service with its resolved price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateQuote {
    pub service: String,
    pub service_code: String,
    pub cost: Decimal,
    pub currency: String,
    /// Not provided by the rate response.
    pub package: Option<String>,
    /// Not provided by the rate response.
    pub delivery_day: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateReport {
    pub status: String,
    pub quotes: Vec<RateQuote>,
}
