use std::str::FromStr;

use regex::Captures;

use super::patterns::{
    MetricPattern, AGE_PATTERNS, BLOOD_PRESSURE_PATTERNS, FEMALE_PATTERN, GLUCOSE_PATTERNS,
    HBA1C_PATTERNS, HEIGHT_PATTERNS, MALE_PATTERN, WEIGHT_PATTERNS,
};
use super::types::{
    ExtractedMetrics, Gender, PlausibleRange, AGE_RANGE, DIASTOLIC_RANGE, GLUCOSE_RANGE,
    HBA1C_RANGE, HEIGHT_RANGE, SYSTOLIC_RANGE, WEIGHT_RANGE,
};

/// Recover clinical metrics from free report text.
///
/// Never fails: text with nothing recognisable yields an all-absent record.
pub fn extract(raw_text: &str) -> ExtractedMetrics {
    let text = normalize_for_matching(raw_text);

    let (bp_systolic, bp_diastolic) = match extract_blood_pressure(&text) {
        Some((systolic, diastolic)) => (Some(systolic), Some(diastolic)),
        None => (None, None),
    };

    let metrics = ExtractedMetrics {
        glucose: first_in_range(&text, &GLUCOSE_PATTERNS, &GLUCOSE_RANGE),
        hba1c: first_in_range(&text, &HBA1C_PATTERNS, &HBA1C_RANGE),
        bp_systolic,
        bp_diastolic,
        age: first_in_range(&text, &AGE_PATTERNS, &AGE_RANGE),
        gender: extract_gender(&text),
        height: first_in_range(&text, &HEIGHT_PATTERNS, &HEIGHT_RANGE),
        weight: first_in_range(&text, &WEIGHT_PATTERNS, &WEIGHT_RANGE),
    };

    tracing::debug!(
        input_chars = raw_text.len(),
        found = metrics.found_count(),
        "Metric extraction complete"
    );

    metrics
}

/// Lower-case and collapse every whitespace run to one space, so labels and
/// values split across lines still match single-line patterns.
pub fn normalize_for_matching(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Try each pattern group in order; only the first match of a group is
/// considered. A group whose first candidate is unparseable or implausible
/// is abandoned and the next group is tried.
fn first_match<T>(
    text: &str,
    patterns: &[MetricPattern],
    accept: impl Fn(&Captures<'_>) -> Option<T>,
) -> Option<T> {
    patterns.iter().find_map(|p| {
        let caps = p.regex.captures(text)?;
        let value = accept(&caps);
        if value.is_none() {
            tracing::trace!(pattern = p.description, orientation = ?p.orientation, "Candidate rejected");
        }
        value
    })
}

fn first_in_range<T>(text: &str, patterns: &[MetricPattern], range: &PlausibleRange<T>) -> Option<T>
where
    T: FromStr + PartialOrd,
{
    first_match(text, patterns, |caps| {
        parse_capture::<T>(caps, 1).filter(|v| range.contains(v))
    })
}

/// Systolic and diastolic are accepted together or not at all.
fn extract_blood_pressure(text: &str) -> Option<(u32, u32)> {
    first_match(text, &BLOOD_PRESSURE_PATTERNS, |caps| {
        let systolic = parse_capture::<u32>(caps, 1)?;
        let diastolic = parse_capture::<u32>(caps, 2)?;
        (SYSTOLIC_RANGE.contains(&systolic) && DIASTOLIC_RANGE.contains(&diastolic))
            .then_some((systolic, diastolic))
    })
}

fn extract_gender(text: &str) -> Option<Gender> {
    if MALE_PATTERN.is_match(text) {
        Some(Gender::Male)
    } else if FEMALE_PATTERN.is_match(text) {
        Some(Gender::Female)
    } else {
        None
    }
}

fn parse_capture<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}
