use serde::{Deserialize, Serialize};

/// Clinical metrics recovered from one report's text.
///
/// Every field is optional: a value is present only when a pattern matched
/// and the value passed the field's plausibility range. Absent fields
/// serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMetrics {
    /// Fasting glucose in mg/dL.
    pub glucose: Option<f64>,
    /// Glycated hemoglobin in percent.
    pub hba1c: Option<f64>,
    /// Systolic pressure in mmHg. Present iff `bp_diastolic` is present.
    pub bp_systolic: Option<u32>,
    /// Diastolic pressure in mmHg.
    pub bp_diastolic: Option<u32>,
    /// Age in years.
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// Height in cm.
    pub height: Option<f64>,
    /// Weight in kg.
    pub weight: Option<f64>,
}

impl ExtractedMetrics {
    /// Number of metrics recovered. Blood pressure counts once.
    pub fn found_count(&self) -> usize {
        [
            self.glucose.is_some(),
            self.hba1c.is_some(),
            self.bp_systolic.is_some(),
            self.age.is_some(),
            self.gender.is_some(),
            self.height.is_some(),
            self.weight.is_some(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Inclusive plausibility bounds for a numeric metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibleRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> PlausibleRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// NaN never satisfies the bounds.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

pub const GLUCOSE_RANGE: PlausibleRange<f64> = PlausibleRange::new(50.0, 500.0);
pub const HBA1C_RANGE: PlausibleRange<f64> = PlausibleRange::new(3.0, 15.0);
pub const SYSTOLIC_RANGE: PlausibleRange<u32> = PlausibleRange::new(70, 250);
pub const DIASTOLIC_RANGE: PlausibleRange<u32> = PlausibleRange::new(40, 150);
pub const AGE_RANGE: PlausibleRange<u32> = PlausibleRange::new(1, 120);
pub const HEIGHT_RANGE: PlausibleRange<f64> = PlausibleRange::new(50.0, 250.0);
pub const WEIGHT_RANGE: PlausibleRange<f64> = PlausibleRange::new(20.0, 300.0);
