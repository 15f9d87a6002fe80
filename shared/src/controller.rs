use crate::error::{FieldError, PredictError};
use crate::form::{FieldValue, FormState};
use crate::prediction::{PredictionRequest, PredictionResponse};

/// Result of the last submission. Only one of result or error can be held.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Ready(PredictionResponse),
    Failed(String),
}

/// What the results card shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    Placeholder,
    Error(&'a str),
    Result(&'a PredictionResponse),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: FormState,
    loading: bool,
    outcome: Outcome,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn update_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        self.form.update_field(name, value)
    }

    /// Starts a submission and hands back the payload to send.
    ///
    /// Returns `None` while another request is pending, or when the form
    /// cannot be coerced; in the latter case the failure becomes the error
    /// state and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<PredictionRequest> {
        if self.loading {
            return None;
        }
        self.outcome = Outcome::Idle;

        match self.form.to_request() {
            Ok(request) => {
                self.loading = true;
                Some(request)
            }
            Err(err) => {
                self.outcome = Outcome::Failed(err.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<PredictionResponse, PredictError>) {
        self.loading = false;
        self.outcome = match result {
            Ok(response) => Outcome::Ready(response),
            Err(err) => Outcome::Failed(err.to_string()),
        };
    }

    /// Clears the form and any shown result or error. A pending request is
    /// left to complete.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.outcome = Outcome::Idle;
    }

    pub fn fill_sample(&mut self) {
        self.form = FormState::sample();
    }

    pub fn view(&self) -> ViewState<'_> {
        match &self.outcome {
            Outcome::Idle => ViewState::Placeholder,
            Outcome::Ready(response) => ViewState::Result(response),
            Outcome::Failed(message) => ViewState::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Occupation;
    use std::collections::BTreeMap;

    fn high_response() -> PredictionResponse {
        PredictionResponse {
            category: "High".into(),
            confidence: 0.87,
            class_probabilities: BTreeMap::from([
                ("High".to_string(), 0.87),
                ("Low".to_string(), 0.03),
                ("Medium".to_string(), 0.1),
            ]),
        }
    }

    fn filled() -> FormController {
        let mut controller = FormController::new();
        for (name, value) in [
            ("age", "32"),
            ("weight", "75"),
            ("height", "1.75"),
            ("income_lpa", "12"),
            ("city", "Pune"),
            ("occupation", "student"),
        ] {
            controller
                .update_field(name, FieldValue::Text(value.into()))
                .unwrap();
        }
        controller
            .update_field("smoker", FieldValue::Checked(true))
            .unwrap();
        controller
    }

    #[test]
    fn starts_with_placeholder() {
        let controller = FormController::new();
        assert!(!controller.is_loading());
        assert_eq!(controller.view(), ViewState::Placeholder);
    }

    #[test]
    fn submit_coerces_numeric_fields() {
        let mut controller = filled();
        let request = controller.begin_submit().unwrap();
        assert_eq!(request.age, 32);
        assert_eq!(request.weight, 75.0);
        assert_eq!(request.height, 1.75);
        assert_eq!(request.income_lpa, 12.0);
        assert!(request.smoker);
        assert_eq!(request.city, "Pune");
        assert_eq!(request.occupation, Occupation::Student);
        assert!(controller.is_loading());
    }

    #[test]
    fn success_shows_result_and_clears_loading() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Ok(high_response()));

        assert!(!controller.is_loading());
        match controller.view() {
            ViewState::Result(response) => {
                assert_eq!(response.category, "High");
                assert_eq!(response.confidence_label(), "87.0%");
            }
            other => panic!("expected result, got {other:?}"),
        }
    }

    #[test]
    fn failure_shows_exact_detail_and_no_result() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Err(PredictError::rejected(
            422,
            r#"{"detail":"Invalid city"}"#,
        )));

        assert!(!controller.is_loading());
        assert_eq!(controller.view(), ViewState::Error("Invalid city"));
        assert_eq!(controller.outcome(), &Outcome::Failed("Invalid city".into()));
    }

    #[test]
    fn network_failure_is_recoverable() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Err(PredictError::Network("Failed to fetch".into())));
        assert_eq!(controller.view(), ViewState::Error("Network error: Failed to fetch"));

        assert!(controller.begin_submit().is_some());
        assert_eq!(controller.view(), ViewState::Placeholder);
    }

    #[test]
    fn second_submit_is_ignored_while_pending() {
        let mut controller = filled();
        assert!(controller.begin_submit().is_some());
        assert!(controller.begin_submit().is_none());
        assert!(controller.is_loading());
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Ok(high_response()));

        controller.begin_submit().unwrap();
        assert_eq!(controller.view(), ViewState::Placeholder);
    }

    #[test]
    fn uncoercible_form_surfaces_error_without_request() {
        let mut controller = FormController::new();
        controller
            .update_field("age", FieldValue::Text("thirty".into()))
            .unwrap();

        assert!(controller.begin_submit().is_none());
        assert!(!controller.is_loading());
        assert!(matches!(controller.view(), ViewState::Error(message) if message.starts_with("age")));
    }

    #[test]
    fn reset_after_success_clears_everything() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Ok(high_response()));

        controller.reset();
        assert_eq!(controller.form(), &FormState::default());
        assert_eq!(controller.view(), ViewState::Placeholder);
    }

    #[test]
    fn fill_sample_keeps_result_and_error() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.finish(Ok(high_response()));
        controller.fill_sample();
        assert_eq!(controller.form(), &FormState::sample());
        assert!(matches!(controller.view(), ViewState::Result(_)));

        controller.begin_submit().unwrap();
        controller.finish(Err(PredictError::Network("offline".into())));
        controller.fill_sample();
        assert_eq!(controller.view(), ViewState::Error("Network error: offline"));
    }

    #[test]
    fn reset_does_not_cancel_pending_request() {
        let mut controller = filled();
        controller.begin_submit().unwrap();
        controller.reset();
        assert!(controller.is_loading());

        controller.finish(Ok(high_response()));
        assert!(!controller.is_loading());
        assert!(matches!(controller.view(), ViewState::Result(_)));
    }
}
