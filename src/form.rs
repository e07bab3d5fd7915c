//! Health form population from extracted report metrics.
//!
//! The form holds whatever the user has typed. Autofill only ever writes
//! values that the report actually contained; a missing metric leaves the
//! user's input alone.

use serde::{Deserialize, Serialize};

use crate::pipeline::metrics::{ExtractedMetrics, Gender};

/// Form inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Glucose,
    Hba1c,
    BloodPressure,
    Age,
    Gender,
    Height,
    Weight,
}

impl MetricField {
    pub fn label(self) -> &'static str {
        match self {
            MetricField::Glucose => "Glucose",
            MetricField::Hba1c => "HbA1c",
            MetricField::BloodPressure => "Blood Pressure",
            MetricField::Age => "Age",
            MetricField::Gender => "Gender",
            MetricField::Height => "Height",
            MetricField::Weight => "Weight",
        }
    }
}

/// User-editable risk assessment inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthForm {
    pub glucose: Option<f64>,
    pub hba1c: Option<f64>,
    pub bp_systolic: Option<u32>,
    pub bp_diastolic: Option<u32>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl HealthForm {
    /// Copy every present metric into the form and return the fields that
    /// were written. Blood pressure is written only as a complete pair.
    pub fn autofill(&mut self, metrics: &ExtractedMetrics) -> Vec<MetricField> {
        let mut filled = Vec::new();

        if let Some(v) = metrics.glucose {
            self.glucose = Some(v);
            filled.push(MetricField::Glucose);
        }
        if let Some(v) = metrics.hba1c {
            self.hba1c = Some(v);
            filled.push(MetricField::Hba1c);
        }
        if let (Some(sys), Some(dia)) = (metrics.bp_systolic, metrics.bp_diastolic) {
            self.bp_systolic = Some(sys);
            self.bp_diastolic = Some(dia);
            filled.push(MetricField::BloodPressure);
        }
        if let Some(v) = metrics.age {
            self.age = Some(v);
            filled.push(MetricField::Age);
        }
        if let Some(v) = metrics.gender {
            self.gender = Some(v);
            filled.push(MetricField::Gender);
        }
        if let Some(v) = metrics.height {
            self.height = Some(v);
            filled.push(MetricField::Height);
        }
        if let Some(v) = metrics.weight {
            self.weight = Some(v);
            filled.push(MetricField::Weight);
        }

        tracing::info!(
            fields = %filled.iter().map(|f| f.label()).collect::<Vec<_>>().join(", "),
            "Auto-filled form fields"
        );

        filled
    }
}
