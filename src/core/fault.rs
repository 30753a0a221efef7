use crate::utils::error::{CarrierError, RateError};
use serde_json::Value;

const CARRIER: &str = "UPS";

/// Translates a carrier fault document into a domain error.
///
/// The primary error lives at `detail/Errors/ErrorDetail/PrimaryErrorCode`.
/// When that path is absent the result is [`RateError::MalformedFaultError`],
/// never a carrier error with guessed content.
pub fn translate_fault(fault: Value) -> RateError {
    let primary = primary_error_code(&fault);
    let code = primary.and_then(|p| text_at(p, "Code"));
    let description = primary.and_then(|p| text_at(p, "Description"));

    match (code, description) {
        (Some(code), Some(description)) => {
            let message = format!("{} Error {}: {}", CARRIER, code, description);
            tracing::warn!(code = %code, "{}", message);
            RateError::CarrierError(CarrierError {
                code,
                message,
                fault,
            })
        }
        _ => {
            tracing::error!("Carrier fault without a primary error code: {}", fault);
            RateError::MalformedFaultError {
                message: "fault lacks detail/Errors/ErrorDetail/PrimaryErrorCode/{Code,Description}"
                    .to_string(),
                fault,
            }
        }
    }
}

fn primary_error_code(fault: &Value) -> Option<&Value> {
    let detail = fault.get("detail")?.get("Errors")?.get("ErrorDetail")?;
    // 多筆錯誤時以第一筆為主
    let detail = match detail {
        Value::Array(items) => items.first()?,
        other => other,
    };
    detail.get("PrimaryErrorCode")
}

fn text_at(node: &Value, key: &str) -> Option<String> {
    match node.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
