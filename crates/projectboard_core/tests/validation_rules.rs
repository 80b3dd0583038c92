use projectboard_core::{validate, ConstraintViolation, FieldValue, ValidationRule};

#[test]
fn required_rejects_blank_values_and_accepts_text() {
    for blank in ["", " ", "\t", "  \n  "] {
        assert!(!validate(&ValidationRule::new(blank).required()), "{blank:?}");
    }
    assert!(validate(&ValidationRule::new("Build API").required()));
}

#[test]
fn headcount_bounds_are_inclusive() {
    let rule = |value: i64| ValidationRule::new(value).required().min(1.0).max(9.0);

    assert!(!validate(&rule(0)));
    assert!(validate(&rule(1)));
    assert!(validate(&rule(9)));
    assert!(!validate(&rule(10)));
}

#[test]
fn mismatched_constraint_kinds_are_skipped() {
    let text_with_range = ValidationRule::new("eleven").min(1.0).max(9.0);
    assert!(validate(&text_with_range));

    let number_with_length = ValidationRule::new(FieldValue::Number(42.0))
        .min_length(10)
        .max_length(1);
    assert!(validate(&number_with_length));
}

#[test]
fn all_constraints_must_hold() {
    let rule = ValidationRule::new("abc")
        .required()
        .min_length(2)
        .max_length(3);
    assert!(validate(&rule));

    let rule = ValidationRule::new(5_i64).min(1.0).max(4.0);
    assert_eq!(rule.check(), Err(ConstraintViolation::Max { max: 4.0, actual: 5.0 }));
    assert!(rule.check().unwrap_err().to_string().contains("above maximum"));
}
