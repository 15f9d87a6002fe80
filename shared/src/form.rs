use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{FieldError, PredictError};
use crate::prediction::PredictionRequest;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumMessage,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Occupation {
    #[strum(message = "Retired")]
    Retired,
    #[strum(message = "Freelancer")]
    Freelancer,
    #[strum(message = "Student")]
    Student,
    #[strum(message = "Government Job")]
    GovernmentJob,
    #[strum(message = "Business Owner")]
    BusinessOwner,
    #[strum(message = "Unemployed")]
    Unemployed,
    #[default]
    #[strum(message = "Private Job")]
    PrivateJob,
}

impl Occupation {
    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or("Unknown")
    }

    /// All occupations in the order the select lists them.
    pub fn all() -> impl Iterator<Item = Occupation> {
        Occupation::iter()
    }
}

/// Names carried by the form inputs' `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Age,
    Weight,
    Height,
    IncomeLpa,
    Smoker,
    City,
    Occupation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

pub const SAMPLE_CITIES: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Jaipur",
    "Lucknow",
    "Patna",
];

/// Raw form contents. Numeric fields stay as typed until submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub income_lpa: String,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

impl FormState {
    pub fn sample() -> Self {
        Self {
            age: "32".into(),
            weight: "75".into(),
            height: "1.75".into(),
            income_lpa: "12".into(),
            smoker: false,
            city: "Mumbai".into(),
            occupation: Occupation::PrivateJob,
        }
    }

    pub fn update_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        let field: Field = name
            .parse()
            .map_err(|_| FieldError::UnknownField(name.to_string()))?;

        match (field, value) {
            (Field::Smoker, FieldValue::Checked(checked)) => self.smoker = checked,
            (Field::Smoker, FieldValue::Text(_)) => return Err(FieldError::ExpectedChecked(field)),
            (_, FieldValue::Checked(_)) => return Err(FieldError::ExpectedText(field)),
            (Field::Age, FieldValue::Text(text)) => self.age = text,
            (Field::Weight, FieldValue::Text(text)) => self.weight = text,
            (Field::Height, FieldValue::Text(text)) => self.height = text,
            (Field::IncomeLpa, FieldValue::Text(text)) => self.income_lpa = text,
            (Field::City, FieldValue::Text(text)) => self.city = text,
            (Field::Occupation, FieldValue::Text(text)) => {
                self.occupation = text
                    .parse()
                    .map_err(|_| FieldError::UnknownOccupation(text.clone()))?;
            }
        }
        Ok(())
    }

    /// Raw text of one of the four numeric inputs, `None` for any other field.
    pub fn number_text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Age => Some(self.age.as_str()),
            Field::Weight => Some(self.weight.as_str()),
            Field::Height => Some(self.height.as_str()),
            Field::IncomeLpa => Some(self.income_lpa.as_str()),
            Field::Smoker | Field::City | Field::Occupation => None,
        }
    }

    pub fn to_request(&self) -> Result<PredictionRequest, PredictError> {
        Ok(PredictionRequest {
            age: parse_whole(Field::Age, &self.age)?,
            weight: parse_decimal(Field::Weight, &self.weight)?,
            height: parse_decimal(Field::Height, &self.height)?,
            income_lpa: parse_decimal(Field::IncomeLpa, &self.income_lpa)?,
            smoker: self.smoker,
            city: self.city.clone(),
            occupation: self.occupation,
        })
    }
}

fn parse_decimal(field: Field, raw: &str) -> Result<f64, PredictError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PredictError::InvalidInput {
            field,
            value: raw.to_string(),
        })
}

// Decimals are truncated toward zero, "32.7" becomes 32.
fn parse_whole(field: Field, raw: &str) -> Result<i32, PredictError> {
    if let Ok(value) = raw.trim().parse::<i32>() {
        return Ok(value);
    }
    let value = parse_decimal(field, raw)?.trunc();
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(PredictError::InvalidInput {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value as i32)
}
