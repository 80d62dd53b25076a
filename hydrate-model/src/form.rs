use std::str::FromStr;

use crate::water::{
    calculate_water_intake, ActivityLevel, Gender, WaterIntakeInput, WaterIntakeResult,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum Field {
    Weight,
    Height,
    Age,
}

impl Field {
    /// Largest accepted value, in the field's unit (kg, cm, years).
    pub fn max(self) -> f64 {
        match self {
            Field::Weight => 650.0,
            Field::Height => 300.0,
            Field::Age => 150.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0} must be a number")]
    NotANumber(Field),
    #[error("{0} must be greater than zero")]
    NotPositive(Field),
    #[error("{0} must be at most {max}", max = .0.max())]
    TooLarge(Field),
    #[error("{0} must be a whole number")]
    NotWholeNumber(Field),
    #[error("Unknown gender \"{0}\"")]
    UnknownGender(String),
    #[error("Unknown activity level \"{0}\"")]
    UnknownActivityLevel(String),
}

/// Untrusted form submission, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct FormInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
}

impl FormInput {
    /// Checks the submission and builds the estimator input from it.
    ///
    /// Weight, height and age must be above zero and at most [`Field::max`].
    /// Missing gender and activity level fall back to the values the form
    /// preselects (`male`, `sedentary`). The first problem found is reported.
    pub fn validate(&self) -> Result<WaterIntakeInput, InvalidInput> {
        let weight = measurement(self.weight, Field::Weight)?;
        let height = measurement(self.height, Field::Height)?;
        let age = measurement(self.age, Field::Age)?;
        if age.fract() != 0.0 {
            return Err(InvalidInput::NotWholeNumber(Field::Age));
        }

        let gender = match self.gender.as_deref() {
            None => Gender::Male,
            Some(s) => {
                Gender::from_str(s).map_err(|_| InvalidInput::UnknownGender(s.to_owned()))?
            }
        };
        let activity_level = match self.activity_level.as_deref() {
            None => ActivityLevel::Sedentary,
            Some(s) => ActivityLevel::from_str(s)
                .map_err(|_| InvalidInput::UnknownActivityLevel(s.to_owned()))?,
        };

        Ok(WaterIntakeInput {
            weight,
            height,
            age: age as u32,
            gender,
            activity_level,
        })
    }
}

fn measurement(value: Option<f64>, field: Field) -> Result<f64, InvalidInput> {
    let value = value.ok_or(InvalidInput::Missing(field))?;
    if !value.is_finite() {
        Err(InvalidInput::NotANumber(field))
    } else if value <= 0.0 {
        Err(InvalidInput::NotPositive(field))
    } else if value > field.max() {
        Err(InvalidInput::TooLarge(field))
    } else {
        Ok(value)
    }
}

/// State of one form session: whether it was submitted, and what came of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub touched: bool,
    pub error: Option<String>,
    pub result: Option<WaterIntakeResult>,
}

impl FormState {
    pub fn submit(form: &FormInput) -> Self {
        match form.validate() {
            Ok(input) => Self {
                touched: true,
                error: None,
                result: Some(calculate_water_intake(&input)),
            },
            Err(e) => Self {
                touched: true,
                error: Some(e.to_string()),
                result: None,
            },
        }
    }
}
