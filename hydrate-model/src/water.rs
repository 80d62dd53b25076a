//! Daily water intake estimate derived from energy expenditure.
//!
//! BMR comes from the Mifflin-St Jeor equation, is scaled by a physical
//! activity level (PAL) multiplier into TDEE, and TDEE is converted to
//! millilitres at fixed ratios per kilocalorie.

use strum::{Display, EnumIter, EnumString};

/// Millilitres of water per kilocalorie of TDEE for the baseline figure.
pub const BASELINE_ML_PER_KCAL: f64 = 1.0;
/// Millilitres of water per kilocalorie of TDEE for the recommended figure.
pub const RECOMMENDED_ML_PER_KCAL: f64 = 1.5;

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Body metrics for a single estimate.
///
/// Nothing here is checked: weight, height and age are expected to be
/// positive, see [`crate::form::FormInput::validate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WaterIntakeInput {
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    /// Years.
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WaterIntakeResult {
    /// kcal/day
    pub bmr: i64,
    /// kcal/day
    pub tdee: i64,
    /// ml/day
    pub baseline_water_intake: i64,
    /// ml/day
    pub recommended_water_intake: i64,
    pub liters_baseline: f64,
    pub liters_recommended: f64,
}

pub fn basal_metabolic_rate(input: &WaterIntakeInput) -> f64 {
    let base = 10.0 * input.weight + 6.25 * input.height - 5.0 * f64::from(input.age);
    match input.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn total_daily_energy_expenditure(input: &WaterIntakeInput) -> f64 {
    basal_metabolic_rate(input) * input.activity_level.multiplier()
}

/// Computes BMR, TDEE and the two water intake figures.
///
/// Rounding only happens on the returned fields. The millilitre and litre
/// figures are derived from the unrounded TDEE.
pub fn calculate_water_intake(input: &WaterIntakeInput) -> WaterIntakeResult {
    let bmr = basal_metabolic_rate(input);
    let tdee = bmr * input.activity_level.multiplier();

    let baseline = tdee * BASELINE_ML_PER_KCAL;
    let recommended = tdee * RECOMMENDED_ML_PER_KCAL;

    WaterIntakeResult {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        baseline_water_intake: baseline.round() as i64,
        recommended_water_intake: recommended.round() as i64,
        liters_baseline: ml_to_liters(baseline),
        liters_recommended: ml_to_liters(recommended),
    }
}

fn ml_to_liters(ml: f64) -> f64 {
    (ml / 1000.0 * 10.0).round() / 10.0
}
