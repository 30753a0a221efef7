use crate::core::catalog::lookup;
use crate::domain::model::{RateQuote, RateReport};
use crate::domain::response::{Charge, RawRateResponse, RatedShipment};

/// Turns a carrier rate response into one quote per offered service, in response order.
pub fn normalize_rates(
    response: &RawRateResponse,
    services: &'static [(&'static str, &'static str)],
) -> RateReport {
    let quotes = response
        .rated_shipments
        .iter()
        .map(|rated| quote_for(rated, services))
        .collect();

    RateReport {
        status: response.status_description().to_string(),
        quotes,
    }
}

fn quote_for(
    rated: &RatedShipment,
    services: &'static [(&'static str, &'static str)],
) -> RateQuote {
    let code = &rated.service.code;
    let charge = resolve_charge(rated);

    let service = match lookup(services, code) {
        Some(name) => name.to_string(),
        None => {
            tracing::debug!(service_code = %code, "Carrier offered an unlisted service");
            format!("Unknown Service: {}", code)
        }
    };

    RateQuote {
        service,
        service_code: code.clone(),
        cost: charge.monetary_value,
        currency: charge.currency_code.clone(),
        package: None,
        delivery_day: None,
    }
}

// 有議價時優先採用議價總額 (帳號未加入議價方案時不會回傳)
fn resolve_charge(rated: &RatedShipment) -> &Charge {
    rated
        .negotiated_rate_charges
        .as_ref()
        .map(|n| &n.total_charge)
        .unwrap_or(&rated.total_charges)
}
