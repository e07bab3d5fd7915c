use std::sync::LazyLock;

use regex::Regex;

/// Where the descriptive keyword sits relative to the captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `glucose: 135 mg/dl`
    LabelFirst,
    /// `135 mg/dl fasting`
    ValueFirst,
    /// No keyword, or keyword with no unit: `120/80 mmhg`, `glucose 135`.
    Bare,
}

/// One pattern group for a metric. Capture group 1 (and 2 for blood
/// pressure) holds the numeric value.
pub struct MetricPattern {
    pub regex: Regex,
    pub orientation: Orientation,
    pub description: &'static str,
}

/// Patterns run against normalized text, so they are written lower-case
/// with single spaces. Digits are ASCII-only (`[0-9]`): other numerals
/// would match but never parse.
fn pattern(regex_str: &str, orientation: Orientation, description: &'static str) -> MetricPattern {
    MetricPattern {
        regex: Regex::new(regex_str).expect("Invalid metric regex pattern"),
        orientation,
        description,
    }
}

pub static GLUCOSE_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:fasting|fbg|blood glucose|glucose|sugar)[\s:]*([0-9]+\.?[0-9]*)\s*(?:mg\s*/\s*dl|mgdl)",
            Orientation::LabelFirst,
            "Glucose keyword then mg/dL value",
        ),
        pattern(
            r"([0-9]+\.?[0-9]*)\s*(?:mg\s*/\s*dl|mgdl)\s*(?:fasting|blood glucose|glucose)",
            Orientation::ValueFirst,
            "mg/dL value then glucose keyword",
        ),
        pattern(
            r"glucose[\s:]*([0-9]+\.?[0-9]*)",
            Orientation::Bare,
            "Glucose keyword then number, no unit",
        ),
    ]
});

pub static HBA1C_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:hba1c|hba-1c|glycated hemoglobin|a1c)[\s:]*([0-9]+\.?[0-9]*)\s*%",
            Orientation::LabelFirst,
            "HbA1c keyword then percentage",
        ),
        pattern(
            r"([0-9]+\.?[0-9]*)\s*%\s*(?:hba1c|hba-1c|a1c)",
            Orientation::ValueFirst,
            "Percentage then HbA1c keyword",
        ),
    ]
});

pub static BLOOD_PRESSURE_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:blood pressure|bp|pressure)[\s:]*([0-9]+)\s*/\s*([0-9]+)\s*(?:mmhg|mm hg)",
            Orientation::LabelFirst,
            "BP keyword then systolic/diastolic mmHg",
        ),
        pattern(
            r"([0-9]+)\s*/\s*([0-9]+)\s*(?:mmhg|mm hg)\s*(?:blood pressure|bp)",
            Orientation::ValueFirst,
            "Systolic/diastolic mmHg then BP keyword",
        ),
        pattern(
            r"([0-9]+)/([0-9]+)\s*(?:mmhg|mm hg)",
            Orientation::Bare,
            "Systolic/diastolic mmHg",
        ),
    ]
});

pub static AGE_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:age|aged)[\s:]*([0-9]+)\s*(?:years|yrs|yr)",
            Orientation::LabelFirst,
            "Age keyword then years",
        ),
        pattern(
            r"([0-9]+)\s*(?:years|yrs|yr)\s*(?:old|of age)",
            Orientation::ValueFirst,
            "Years then 'old' / 'of age'",
        ),
    ]
});

pub static HEIGHT_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:height|ht)[\s:]*([0-9]+\.?[0-9]*)\s*(?:cm|centimeter)",
            Orientation::LabelFirst,
            "Height keyword then cm",
        ),
        pattern(
            r"([0-9]+\.?[0-9]*)\s*(?:cm|centimeter)\s*(?:height|tall)",
            Orientation::ValueFirst,
            "cm then height keyword",
        ),
    ]
});

pub static WEIGHT_PATTERNS: LazyLock<Vec<MetricPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:weight|wt|body weight)[\s:]*([0-9]+\.?[0-9]*)\s*(?:kg|kilogram)",
            Orientation::LabelFirst,
            "Weight keyword then kg",
        ),
        pattern(
            r"([0-9]+\.?[0-9]*)\s*(?:kg|kilogram)\s*(?:weight|wt)",
            Orientation::ValueFirst,
            "kg then weight keyword",
        ),
    ]
});

/// Checked before `FEMALE_PATTERN`; the first hit decides. Word boundaries
/// are ASCII, so a letter next to an accented character still stands alone.
pub static MALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(?:male|m)(?-u:\b)").expect("Invalid gender regex pattern"));

pub static FEMALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(?:female|f|woman|women)(?-u:\b)").expect("Invalid gender regex pattern")
});
