use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::form::Occupation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

// The deployed service spells the category key `pridected_catagory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "pridected_catagory", alias = "predicted_category")]
    pub category: String,
    pub confidence: f64,
    #[serde(default, alias = "acitve_smoker_class_probabilities")]
    pub class_probabilities: BTreeMap<String, f64>,
}

impl PredictionResponse {
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Width of the confidence bar, kept within 0..=100.
    pub fn confidence_width(&self) -> f64 {
        (self.confidence * 100.0).clamp(0.0, 100.0)
    }

    /// Class probabilities ready for display: readable names, two decimals.
    pub fn probability_rows(&self) -> Vec<(String, String)> {
        self.class_probabilities
            .iter()
            .map(|(class, probability)| {
                (class.replace('_', " "), format!("{:.2}%", probability * 100.0))
            })
            .collect()
    }
}
