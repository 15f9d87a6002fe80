pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the prediction service lives. Set `PREDICTOR_API_URL` at build time
/// to point the UI elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("PREDICTOR_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}
