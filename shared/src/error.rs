use serde_json::Value;
use thiserror::Error;

use crate::form::Field;

pub const GENERIC_FAILURE: &str = "Prediction failed";

/// Every way a prediction attempt can fail. All of them end up as the
/// message shown in the results card.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("{field} must be a number (got \"{value}\")")]
    InvalidInput { field: Field, value: String },
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("{}", rejection_message(.status, .detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

impl PredictError {
    /// Builds the error for a non-success response from its status and raw body.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            detail: failure_detail(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("unknown occupation `{0}`")]
    UnknownOccupation(String),
    #[error("field `{0}` expects a checkbox state")]
    ExpectedChecked(Field),
    #[error("field `{0}` expects text")]
    ExpectedText(Field),
}

fn rejection_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("{GENERIC_FAILURE} (status {status})"),
    }
}

/// Pulls the human readable `detail` out of an error body.
///
/// A string detail is returned as is. A list of validation entries (each with
/// a `msg`) is joined with "; ". Anything else yields `None`.
pub fn failure_detail(body: &str) -> Option<String> {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    match detail {
        Some(Value::String(message)) if !message.is_empty() => Some(message),
        Some(Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_shown_verbatim() {
        let err = PredictError::rejected(400, r#"{"detail":"Invalid city"}"#);
        assert_eq!(err.to_string(), "Invalid city");
    }

    #[test]
    fn validation_entries_are_joined() {
        let body = r#"{"detail":[
            {"loc":["body","age"],"msg":"Input should be greater than 0","type":"greater_than"},
            {"loc":["body","height"],"msg":"Input should be less than 2.5","type":"less_than"}
        ]}"#;
        assert_eq!(
            failure_detail(body).as_deref(),
            Some("Input should be greater than 0; Input should be less than 2.5")
        );
    }

    #[test]
    fn unusable_detail_yields_nothing() {
        assert_eq!(failure_detail(r#"{"error":"boom"}"#), None);
        assert_eq!(failure_detail(r#"{"detail":""}"#), None);
        assert_eq!(failure_detail(r#"{"detail":42}"#), None);
        assert_eq!(failure_detail(r#"{"detail":[{"loc":["body"]}]}"#), None);
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message_with_status() {
        let err = PredictError::rejected(500, r#"{"error":"boom"}"#);
        assert_eq!(err.to_string(), "Prediction failed (status 500)");

        let err = PredictError::rejected(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Prediction failed (status 502)");
        assert!(matches!(err, PredictError::Rejected { status: 502, detail: None }));
    }

    #[test]
    fn invalid_input_names_the_field() {
        let err = PredictError::InvalidInput {
            field: Field::IncomeLpa,
            value: "lots".into(),
        };
        assert_eq!(err.to_string(), "income_lpa must be a number (got \"lots\")");
    }
}
