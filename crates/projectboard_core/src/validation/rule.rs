//! Validation rules and the constraint checker.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value under validation, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn stringified(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// One value plus its optional constraints.
///
/// Absent constraints are vacuously satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValidationRule {
    /// Creates an unconstrained rule for `value`.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks every applicable constraint and reports the first violation.
    ///
    /// Order: required, min length, max length, min, max.
    pub fn check(&self) -> Result<(), ConstraintViolation> {
        if self.required && self.value.stringified().trim().is_empty() {
            return Err(ConstraintViolation::Required);
        }

        if let FieldValue::Text(text) = &self.value {
            let actual = text.chars().count();
            if let Some(min) = self.min_length {
                if actual < min {
                    return Err(ConstraintViolation::MinLength { min, actual });
                }
            }
            if let Some(max) = self.max_length {
                if actual > max {
                    return Err(ConstraintViolation::MaxLength { max, actual });
                }
            }
        }

        if let FieldValue::Number(actual) = self.value {
            if let Some(min) = self.min {
                if actual.is_nan() || actual < min {
                    return Err(ConstraintViolation::Min { min, actual });
                }
            }
            if let Some(max) = self.max {
                if actual.is_nan() || actual > max {
                    return Err(ConstraintViolation::Max { max, actual });
                }
            }
        }

        Ok(())
    }
}

/// Returns `true` when every applicable constraint of `rule` holds.
pub fn validate(rule: &ValidationRule) -> bool {
    rule.check().is_ok()
}

/// First constraint a value failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    Required,
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    Min { min: f64, actual: f64 },
    Max { max: f64, actual: f64 },
}

impl ConstraintViolation {
    /// Short constraint name for structured log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
        }
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::MinLength { min, actual } => {
                write!(f, "length {actual} is below minimum {min}")
            }
            Self::MaxLength { max, actual } => {
                write!(f, "length {actual} is above maximum {max}")
            }
            Self::Min { min, actual } => write!(f, "value {actual} is below minimum {min}"),
            Self::Max { max, actual } => write!(f, "value {actual} is above maximum {max}"),
        }
    }
}

impl Error for ConstraintViolation {}

#[cfg(test)]
mod tests {
    use super::{validate, ConstraintViolation, FieldValue, ValidationRule};

    #[test]
    fn required_rejects_empty_and_whitespace_text() {
        assert!(!validate(&ValidationRule::new("").required()));
        assert!(!validate(&ValidationRule::new("  \t\n").required()));
        assert!(validate(&ValidationRule::new("x").required()));
    }

    #[test]
    fn unconstrained_rule_accepts_anything() {
        assert!(validate(&ValidationRule::new("")));
        assert!(validate(&ValidationRule::new(f64::NAN)));
    }

    #[test]
    fn required_stringifies_numbers() {
        assert!(validate(&ValidationRule::new(0_i64).required()));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let people = |value: i64| ValidationRule::new(value).required().min(1.0).max(9.0);
        assert!(!validate(&people(0)));
        assert!(validate(&people(1)));
        assert!(validate(&people(9)));
        assert!(!validate(&people(10)));
    }

    #[test]
    fn length_bounds_count_characters() {
        let rule = ValidationRule::new("héllo").min_length(5).max_length(5);
        assert!(validate(&rule));
        assert_eq!(
            ValidationRule::new("abc").min_length(5).check(),
            Err(ConstraintViolation::MinLength { min: 5, actual: 3 })
        );
        assert_eq!(
            ValidationRule::new("abcdef").max_length(5).check(),
            Err(ConstraintViolation::MaxLength { max: 5, actual: 6 })
        );
    }

    #[test]
    fn range_bounds_are_skipped_for_text() {
        let rule = ValidationRule::new("not a number").min(1.0).max(9.0);
        assert!(validate(&rule));
        let rule = ValidationRule::new("100").max(9.0);
        assert!(validate(&rule));
    }

    #[test]
    fn length_bounds_are_skipped_for_numbers() {
        let rule = ValidationRule::new(123_456_i64).max_length(2);
        assert!(validate(&rule));
    }

    #[test]
    fn nan_fails_range_bounds() {
        let rule = ValidationRule::new(FieldValue::Number(f64::NAN)).min(1.0);
        assert!(matches!(rule.check(), Err(ConstraintViolation::Min { .. })));
    }

    #[test]
    fn required_is_reported_before_length() {
        let rule = ValidationRule::new(" ").required().min_length(3);
        assert_eq!(rule.check(), Err(ConstraintViolation::Required));
        assert_eq!(ConstraintViolation::Required.as_str(), "required");
    }
}
