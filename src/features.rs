//! Form-field normalization: raw submitted strings into the fixed-order
//! numeric vector the regression model was trained against.

use std::collections::HashMap;

use thiserror::Error;

/// Number of inputs the model consumes.
pub const FEATURE_COUNT: usize = 13;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not a number: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

// Categorical encodings mirror the label encoder the model was trained
// with: labels sorted alphabetically, codes counted from 0.

pub fn quarter_code(label: &str) -> i64 {
    match label {
        "Quarter1" => 0,
        "Quarter2" => 1,
        "Quarter3" => 2,
        "Quarter4" => 3,
        "Quarter5" => 4,
        other => fallback_code("quarter", other),
    }
}

pub fn department_code(label: &str) -> i64 {
    match label {
        "finishing" => 0,
        "sewing" => 1,
        other => fallback_code("department", other),
    }
}

pub fn day_code(label: &str) -> i64 {
    match label {
        "Monday" => 0,
        "Saturday" => 1,
        "Sunday" => 2,
        "Thursday" => 3,
        "Tuesday" => 4,
        "Wednesday" => 5,
        other => fallback_code("day", other),
    }
}

// Unknown labels encode as 0 instead of failing the request; the warning
// is the only trace that an unexpected value came in.
fn fallback_code(field: &str, label: &str) -> i64 {
    tracing::warn!("unrecognized {} label {:?}, encoding as 0", field, label);
    0
}

/// One submitted production row, parsed into the types the model expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub quarter: i64,
    pub department: i64,
    pub day: i64,
    pub team: i64,
    pub targeted_productivity: f64,
    pub smv: f64,
    pub over_time: i64,
    pub incentive: i64,
    pub idle_time: f64,
    pub idle_men: i64,
    pub no_of_style_change: i64,
    pub no_of_workers: f64,
    pub month: i64,
}

impl ProductionRecord {
    /// Build a record from decoded form fields. Categorical labels fall
    /// back to code 0 when unrecognized; numeric fields must parse with
    /// their fixed type.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, FormError> {
        Ok(Self {
            quarter: quarter_code(text_field(fields, "quarter")?),
            department: department_code(text_field(fields, "department")?),
            day: day_code(text_field(fields, "day")?),
            team: int_field(fields, "team")?,
            targeted_productivity: float_field(fields, "targeted_productivity")?,
            smv: float_field(fields, "smv")?,
            over_time: int_field(fields, "over_time")?,
            incentive: int_field(fields, "incentive")?,
            idle_time: float_field(fields, "idle_time")?,
            idle_men: int_field(fields, "idle_men")?,
            no_of_style_change: int_field(fields, "no_of_style_change")?,
            no_of_workers: float_field(fields, "no_of_workers")?,
            month: int_field(fields, "month")?,
        })
    }

    /// The ordered vector the model consumes. Training fixed this layout;
    /// any permutation silently corrupts predictions.
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.quarter as f64,
            self.department as f64,
            self.day as f64,
            self.team as f64,
            self.targeted_productivity,
            self.smv,
            self.over_time as f64,
            self.incentive as f64,
            self.idle_time,
            self.idle_men as f64,
            self.no_of_style_change as f64,
            self.no_of_workers,
            self.month as f64,
        ]
    }
}

fn text_field<'a>(
    fields: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, FormError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or(FormError::MissingField(name))
}

fn int_field(fields: &HashMap<String, String>, name: &'static str) -> Result<i64, FormError> {
    let raw = text_field(fields, name)?;
    raw.trim().parse().map_err(|_| FormError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

fn float_field(fields: &HashMap<String, String>, name: &'static str) -> Result<f64, FormError> {
    let raw = text_field(fields, name)?;
    raw.trim().parse().map_err(|_| FormError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> HashMap<String, String> {
        [
            ("quarter", "Quarter3"),
            ("department", "sewing"),
            ("day", "Sunday"),
            ("team", "8"),
            ("targeted_productivity", "0.80"),
            ("smv", "26.16"),
            ("over_time", "7080"),
            ("incentive", "98"),
            ("idle_time", "0"),
            ("idle_men", "0"),
            ("no_of_style_change", "0"),
            ("no_of_workers", "59.0"),
            ("month", "6"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn quarter_codes_are_exact() {
        assert_eq!(quarter_code("Quarter1"), 0);
        assert_eq!(quarter_code("Quarter3"), 2);
        assert_eq!(quarter_code("Quarter5"), 4);
    }

    #[test]
    fn department_codes_are_exact() {
        assert_eq!(department_code("finishing"), 0);
        assert_eq!(department_code("sewing"), 1);
    }

    #[test]
    fn day_codes_follow_alphabetical_order() {
        assert_eq!(day_code("Monday"), 0);
        assert_eq!(day_code("Saturday"), 1);
        assert_eq!(day_code("Sunday"), 2);
        assert_eq!(day_code("Thursday"), 3);
        assert_eq!(day_code("Tuesday"), 4);
        assert_eq!(day_code("Wednesday"), 5);
    }

    #[test]
    fn unknown_labels_fall_back_to_zero() {
        // Pinned behavior: bad labels encode as 0 rather than erroring.
        assert_eq!(quarter_code("Quarter9"), 0);
        assert_eq!(department_code("cutting"), 0);
        assert_eq!(day_code("Friday"), 0);
    }

    #[test]
    fn record_parses_valid_submission() {
        let record = ProductionRecord::from_form(&valid_fields()).unwrap();
        assert_eq!(record.quarter, 2);
        assert_eq!(record.department, 1);
        assert_eq!(record.day, 2);
        assert_eq!(record.team, 8);
        assert!((record.targeted_productivity - 0.80).abs() < 1e-9);
        assert!((record.smv - 26.16).abs() < 1e-9);
        assert_eq!(record.over_time, 7080);
        assert_eq!(record.incentive, 98);
        assert_eq!(record.no_of_workers, 59.0);
        assert_eq!(record.month, 6);
    }

    #[test]
    fn vector_has_thirteen_entries_in_model_order() {
        let record = ProductionRecord {
            quarter: 1,
            department: 2,
            day: 3,
            team: 4,
            targeted_productivity: 5.0,
            smv: 6.0,
            over_time: 7,
            incentive: 8,
            idle_time: 9.0,
            idle_men: 10,
            no_of_style_change: 11,
            no_of_workers: 12.0,
            month: 13,
        };
        let vector = record.feature_vector();
        assert_eq!(vector.len(), FEATURE_COUNT);
        assert_eq!(
            vector,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0]
        );
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut fields = valid_fields();
        fields.remove("incentive");
        let err = ProductionRecord::from_form(&fields).unwrap_err();
        assert_eq!(err, FormError::MissingField("incentive"));
    }

    #[test]
    fn non_numeric_integer_field_is_rejected() {
        let mut fields = valid_fields();
        fields.insert("team".to_string(), "abc".to_string());
        let err = ProductionRecord::from_form(&fields).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: "team",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn integer_fields_do_not_accept_decimals() {
        let mut fields = valid_fields();
        fields.insert("month".to_string(), "6.5".to_string());
        assert!(matches!(
            ProductionRecord::from_form(&fields),
            Err(FormError::InvalidNumber { field: "month", .. })
        ));
    }

    #[test]
    fn float_fields_accept_integer_text() {
        let mut fields = valid_fields();
        fields.insert("idle_time".to_string(), "3".to_string());
        let record = ProductionRecord::from_form(&fields).unwrap();
        assert_eq!(record.idle_time, 3.0);
    }
}
