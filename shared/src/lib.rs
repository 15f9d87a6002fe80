pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod prediction;

pub use config::ApiConfig;
pub use controller::{FormController, Outcome, ViewState};
pub use error::{FieldError, PredictError};
pub use form::{Field, FieldValue, FormState, Occupation, SAMPLE_CITIES};
pub use prediction::{PredictionRequest, PredictionResponse};
