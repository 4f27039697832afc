//! Body-mass index calculator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::bmi;
use crate::errors::{ensure_range, InputResult};

/// Height and weight as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BmiInput {
    /// Validates height and weight against the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `InputError` if either value is out of range or not finite
    pub fn new(height_cm: f64, weight_kg: f64) -> InputResult<Self> {
        ensure_range("height (cm)", height_cm, bmi::MIN_HEIGHT_CM, bmi::MAX_HEIGHT_CM)?;
        ensure_range("weight (kg)", weight_kg, bmi::MIN_WEIGHT_KG, bmi::MAX_WEIGHT_KG)?;
        Ok(Self {
            height_cm,
            weight_kg,
        })
    }
}

/// Weight category for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Недостатня вага",
            Self::Normal => "Норма",
            Self::Overweight => "Надмірна вага",
            Self::Obese => "Ожиріння",
        }
    }

    /// Extra line shown for the categories that warrant one
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Normal => Some("Вітаємо! Ваша вага в нормі."),
            Self::Obese => Some("Зверніть увагу на раціон та фізичну активність!"),
            _ => None,
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculated BMI with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// BMI rounded to two decimals
    pub bmi: f64,
    pub status: BmiStatus,
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ваш ІМТ: {} — {}", self.bmi, self.status)
    }
}

/// weight / height², with height in metres
pub fn calculate_bmi(input: &BmiInput) -> BmiReport {
    let height_m = input.height_cm / 100.0;
    let value = input.weight_kg / (height_m * height_m);
    let rounded = round2(value);
    BmiReport {
        bmi: rounded,
        status: BmiStatus::from_bmi(value),
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
