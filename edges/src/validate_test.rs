#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Well-formed lines
// =============================================================

#[test]
fn well_formed_line_yields_segment() {
    let seg = validate("0 0 100 100 red").expect("valid line");
    assert_eq!(seg, Segment::new(0.0, 0.0, 100.0, 100.0, "red"));
}

#[test]
fn fractional_and_signed_coordinates_parse() {
    let seg = validate("1.5 +2 3e2 0.25 blue").expect("valid line");
    assert_eq!(seg.coords(), [1.5, 2.0, 300.0, 0.25]);
    assert_eq!(seg.color, "blue");
}

#[test]
fn color_token_is_forwarded_verbatim() {
    let seg = validate("1 2 3 4 #A1b2C3").expect("valid line");
    assert_eq!(seg.color, "#A1b2C3");
}

#[test]
fn empty_color_token_is_accepted() {
    let seg = validate("1 2 3 4 ").expect("trailing space leaves an empty color");
    assert_eq!(seg.color, "");
}

#[test]
fn exact_bounds_are_accepted() {
    let seg = validate("0 4000 4000 0 green").expect("bounds are inclusive");
    assert_eq!(seg.coords(), [0.0, 4000.0, 4000.0, 0.0]);
}

// =============================================================
// WrongFieldCount
// =============================================================

#[test]
fn too_few_fields_is_wrong_field_count() {
    let err = validate("not valid").expect_err("two tokens");
    assert_eq!(
        err,
        ValidationFailure::WrongFieldCount { line: "not valid".to_owned(), expected: 5, found: 2 }
    );
    assert_eq!(err.kind(), FailureKind::WrongFieldCount);
}

#[test]
fn too_many_fields_is_wrong_field_count() {
    let err = validate("1 2 3 4 red extra").expect_err("six tokens");
    assert!(matches!(err, ValidationFailure::WrongFieldCount { found: 6, .. }));
}

#[test]
fn doubled_space_is_wrong_field_count() {
    let err = validate("1  2 3 4 red").expect_err("empty token from doubled space");
    assert!(matches!(err, ValidationFailure::WrongFieldCount { found: 6, .. }));
}

#[test]
fn tab_separator_is_wrong_field_count() {
    let err = validate("1\t2 3 4 red").expect_err("tabs are not separators");
    assert!(matches!(err, ValidationFailure::WrongFieldCount { found: 4, .. }));
}

#[test]
fn leading_space_is_wrong_field_count() {
    let err = validate(" 1 2 3 4 red").expect_err("leading empty token");
    assert_eq!(err.kind(), FailureKind::WrongFieldCount);
}

#[test]
fn wrong_field_count_message_names_expected_form() {
    let err = validate("not valid").expect_err("two tokens");
    let msg = err.to_string();
    assert!(msg.contains("expected 5 fields"), "{msg}");
    assert!(msg.contains("x1 y1 x2 y2 color"), "{msg}");
    assert!(msg.contains("found 2"), "{msg}");
}

#[test]
fn wrong_field_count_message_uses_edge_form_constant() {
    let msg = validate("1 2 3 4 red extra").expect_err("six tokens").to_string();
    assert!(msg.contains(&format!("`{}`", crate::EDGE_FORM)), "{msg}");
}

// =============================================================
// NotANumber
// =============================================================

#[test]
fn non_numeric_coordinate_is_not_a_number() {
    let err = validate("1 two 3 4 red").expect_err("non-numeric");
    assert_eq!(
        err,
        ValidationFailure::NotANumber { line: "1 two 3 4 red".to_owned(), token: "two".to_owned() }
    );
}

#[test]
fn numeric_prefix_is_not_a_number() {
    let err = validate("12abc 2 3 4 red").expect_err("partial float");
    assert_eq!(err.kind(), FailureKind::NotANumber);
}

#[test]
fn nan_literal_is_not_a_number() {
    let err = validate("NaN 2 3 4 red").expect_err("NaN is rejected");
    assert_eq!(err.kind(), FailureKind::NotANumber);
}

#[test]
fn parse_failure_wins_over_bounds_failure() {
    let err = validate("5000 abc 1 1 red").expect_err("both problems");
    assert_eq!(err.kind(), FailureKind::NotANumber);
}

#[test]
fn first_non_numeric_token_is_reported() {
    let err = validate("1 2 x y red").expect_err("two bad tokens");
    assert!(matches!(err, ValidationFailure::NotANumber { ref token, .. } if token == "x"));
}

// =============================================================
// OutOfBounds
// =============================================================

#[test]
fn just_below_min_is_out_of_bounds() {
    let err = validate("-0.0001 0 0 0 red").expect_err("below min");
    assert!(matches!(err, ValidationFailure::OutOfBounds { value, .. } if value == -0.0001));
}

#[test]
fn just_above_max_is_out_of_bounds() {
    let err = validate("0 0 4000.0001 0 red").expect_err("above max");
    assert_eq!(err.kind(), FailureKind::OutOfBounds);
}

#[test]
fn infinity_is_out_of_bounds() {
    let err = validate("inf 0 0 0 red").expect_err("infinite");
    assert_eq!(err.kind(), FailureKind::OutOfBounds);
}

#[test]
fn out_of_bounds_message_reports_configured_bound() {
    let err = validate("0 0 0 9000 red").expect_err("above max");
    let msg = err.to_string();
    assert!(msg.contains("[0, 4000]"), "{msg}");
    assert!(msg.contains("9000"), "{msg}");
}

#[test]
fn custom_bounds_are_respected() {
    let bounds = CoordBounds::new(-10.0, 10.0);
    let seg = validate_with("-10 10 0 0 red", &bounds).expect("inside custom bound");
    assert_eq!(seg.coords(), [-10.0, 10.0, 0.0, 0.0]);

    let err = validate_with("11 0 0 0 red", &bounds).expect_err("outside custom bound");
    assert_eq!(
        err,
        ValidationFailure::OutOfBounds { line: "11 0 0 0 red".to_owned(), value: 11.0, min: -10.0, max: 10.0 }
    );
}

#[test]
fn failure_exposes_offending_line() {
    let err = validate("a b c d e").expect_err("non-numeric");
    assert_eq!(err.line(), "a b c d e");
}
