use crate::core::builder::{build_shipment_request, BuilderOptions, UnitsConfig};
use crate::core::catalog::SERVICES;
use crate::core::fault::translate_fault;
use crate::core::normalizer::normalize_rates;
use crate::domain::model::{Address, Credentials, Package, RateReport};
use crate::domain::ports::{GatewayError, RateGateway};
use crate::domain::shipment::CodeDescription;
use crate::utils::error::{RateError, Result};

/// Rates for the shipper's account.
pub const CLASSIFICATION_CODE: &str = "01";
/// Daily pickup.
pub const PICKUP_TYPE_CODE: &str = "01";

/// Entry point for rating shipments against the carrier.
///
/// Holds no per-call state, so one client can serve concurrent calls.
pub struct RateClient<G: RateGateway> {
    gateway: G,
    credentials: Credentials,
    units: UnitsConfig,
    options: BuilderOptions,
}

impl<G: RateGateway> RateClient<G> {
    pub fn new(gateway: G, credentials: Credentials) -> Self {
        Self::with_settings(
            gateway,
            credentials,
            UnitsConfig::default(),
            BuilderOptions::default(),
        )
    }

    pub fn with_settings(
        gateway: G,
        credentials: Credentials,
        units: UnitsConfig,
        options: BuilderOptions,
    ) -> Self {
        Self {
            gateway,
            credentials,
            units,
            options,
        }
    }

    pub fn units(&self) -> &UnitsConfig {
        &self.units
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Requests every service the carrier offers for this shipment.
    pub async fn rate(
        &self,
        packages: &[Package],
        shipper: &Address,
        recipient: &Address,
        packaging_type: &str,
    ) -> Result<RateReport> {
        // 在任何網路呼叫前先驗證輸入
        let mut shipment = build_shipment_request(
            packages,
            shipper,
            recipient,
            packaging_type,
            &self.units,
            &self.credentials,
            &self.options,
        )?;
        shipment.shipment_rating_options.negotiated_rates_indicator = Some(String::new());

        let classification = CodeDescription::described(CLASSIFICATION_CODE, "Classification");
        let pickup = CodeDescription::described(PICKUP_TYPE_CODE, "Daily Pickup");

        tracing::info!(
            packages = packages.len(),
            packaging_type = %packaging_type,
            "Requesting carrier rates"
        );

        let raw = self
            .gateway
            .submit_rate_request(&shipment, &classification, &pickup)
            .await
            .map_err(into_rate_error)?;

        let report = normalize_rates(&raw, SERVICES);
        tracing::info!(
            status = %report.status,
            quotes = report.quotes.len(),
            "Received carrier rates"
        );
        Ok(report)
    }
}

fn into_rate_error(err: GatewayError) -> RateError {
    match err {
        GatewayError::Fault(document) => translate_fault(document),
        GatewayError::Transport(e) => RateError::ApiError(e),
        GatewayError::UnexpectedStatus { status, body } => {
            RateError::UnexpectedStatusError { status, body }
        }
        GatewayError::Decode(message) => RateError::DecodeError { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::RawRateResponse;
    use crate::domain::shipment::ShipmentRequest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockGateway {
        answer: Arc<dyn Fn() -> std::result::Result<RawRateResponse, GatewayError> + Send + Sync>,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<ShipmentRequest>>>,
    }

    impl MockGateway {
        fn new(
            answer: impl Fn() -> std::result::Result<RawRateResponse, GatewayError>
                + Send
                + Sync
                + 'static,
        ) -> Self {
            Self {
                answer: Arc::new(answer),
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl RateGateway for MockGateway {
        async fn submit_rate_request(
            &self,
            shipment: &ShipmentRequest,
            classification: &CodeDescription,
            pickup_type: &CodeDescription,
        ) -> std::result::Result<RawRateResponse, GatewayError> {
            assert_eq!(classification.code, "01");
            assert_eq!(pickup_type.description.as_deref(), Some("Daily Pickup"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(shipment.clone());
            (self.answer)()
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
            access_license: "license".to_string(),
            shipper_number: "A1B2C3".to_string(),
        }
    }

    fn success() -> std::result::Result<RawRateResponse, GatewayError> {
        Ok(serde_json::from_value(serde_json::json!({
            "Response": {"ResponseStatus": {"Code": "1", "Description": "Success"}},
            "RatedShipment": [{
                "Service": {"Code": "08"},
                "TotalCharges": {"CurrencyCode": "USD", "MonetaryValue": "120.00"}
            }]
        }))
        .unwrap())
    }

    #[tokio::test]
    async fn test_rate_requests_negotiated_rates() {
        let gateway = MockGateway::new(success);
        let client = RateClient::new(gateway.clone(), credentials());
        let shipper = Address::new("Shipper", "BR").unwrap();
        let recipient = Address::new("Recipient", "usa").unwrap().with_state("AL");

        let report = client
            .rate(&[Package::new(2, 3, 4, 5).unwrap()], &shipper, &recipient, "21")
            .await
            .unwrap();

        assert_eq!(report.status, "Success");
        assert_eq!(report.quotes[0].service, "UPS Worldwide Expedited");

        let sent = gateway.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(
            sent.shipment_rating_options.negotiated_rates_indicator.as_deref(),
            Some("")
        );
        assert_eq!(sent.ship_to.address.country_code, "US");
    }

    #[tokio::test]
    async fn test_validation_happens_before_gateway_call() {
        let gateway = MockGateway::new(success);
        let client = RateClient::new(gateway.clone(), credentials());
        let shipper = Address::new("Shipper", "BR").unwrap();
        let recipient = Address::new("Recipient", "US").unwrap();

        let err = client.rate(&[], &shipper, &recipient, "21").await.unwrap_err();

        assert!(matches!(err, RateError::ValidationError { .. }));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fault_is_translated_at_the_boundary() {
        let gateway = MockGateway::new(|| {
            Err(GatewayError::Fault(serde_json::json!({
                "detail": {"Errors": {"ErrorDetail": {"PrimaryErrorCode": {
                    "Code": "111210",
                    "Description": "The requested service is unavailable between the selected locations."
                }}}}
            })))
        });
        let client = RateClient::new(gateway, credentials());
        let shipper = Address::new("Shipper", "BR").unwrap();
        let recipient = Address::new("Recipient", "US").unwrap();

        let err = client
            .rate(&[Package::new(2, 3, 4, 5).unwrap()], &shipper, &recipient, "21")
            .await
            .unwrap_err();

        assert_eq!(err.carrier_code(), Some("111210"));
        assert!(err.to_string().starts_with("UPS Error 111210: "));
    }

    #[tokio::test]
    async fn test_malformed_fault_surfaces_as_contract_error() {
        let gateway = MockGateway::new(|| {
            Err(GatewayError::Fault(serde_json::json!({"faultstring": "boom"})))
        });
        let client = RateClient::new(gateway, credentials());
        let shipper = Address::new("Shipper", "BR").unwrap();
        let recipient = Address::new("Recipient", "US").unwrap();

        let err = client
            .rate(&[Package::new(2, 3, 4, 5).unwrap()], &shipper, &recipient, "21")
            .await
            .unwrap_err();

        assert!(matches!(err, RateError::MalformedFaultError { .. }));
    }

    #[tokio::test]
    async fn test_independent_calls_can_run_concurrently() {
        let gateway = MockGateway::new(success);
        let client = RateClient::new(gateway.clone(), credentials());
        let shipper = Address::new("Shipper", "BR").unwrap();
        let recipient = Address::new("Recipient", "US").unwrap();
        let packages = vec![Package::new(2, 3, 4, 5).unwrap()];

        let (a, b) = tokio::join!(
            client.rate(&packages, &shipper, &recipient, "21"),
            client.rate(&packages, &shipper, &recipient, "02"),
        );

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }
}
