//! Unit tests for form helpers.

use super::*;

#[test]
fn test_format_run() {
    assert_eq!(format_run("123456785"), "12.345.678-5");
    assert_eq!(format_run("7654321k"), "7.654.321-K");
    assert_eq!(format_run("12.345.678-5"), "12.345.678-5");
    assert_eq!(format_run("1-9"), "1-9");
    assert_eq!(format_run("1234"), "123-4");
    assert_eq!(format_run("12345"), "1.234-5");
}

#[test]
fn test_format_run_groups_only_digit_runs() {
    // A `k` typed inside the body ends the run that gets grouped
    assert_eq!(format_run("123456k7"), "123.456k-7");
    assert_eq!(format_run("12345k7"), "12.345k-7");
    assert_eq!(format_run("12k3456785"), "12k.345.678-5");
    assert_eq!(format_run("k1234"), "k.123-4");
}

#[test]
fn test_format_run_short_or_empty_input() {
    assert_eq!(format_run(""), "");
    assert_eq!(format_run("7"), "7");
    assert_eq!(format_run("abc"), "");
    assert_eq!(format_run("k"), "k");
}

#[test]
fn test_sanitize_amount() {
    assert_eq!(sanitize_amount("12.500"), "12500");
    assert_eq!(sanitize_amount("$ 3,000 CLP"), "3000");
    assert_eq!(sanitize_amount("-40"), "40");
    assert_eq!(sanitize_amount("abc"), "");
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("2500"), Some(2500));
    assert_eq!(parse_amount(" 0 "), Some(0));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount("1.5"), None);
    assert_eq!(parse_amount("99999999999999999999"), None);
}

#[test]
fn test_validate_date_range() {
    let (start, end) = validate_date_range("2025-01-01", "2025-01-31").unwrap();
    assert_eq!(start.to_string(), "2025-01-01");
    assert_eq!(end.to_string(), "2025-01-31");

    // Same day is a valid range
    assert!(validate_date_range("2025-03-10", "2025-03-10").is_ok());
}

#[test]
fn test_validate_date_range_errors() {
    let errors = validate_date_range("", "").unwrap_err();
    assert_eq!(errors.get("start"), Some(&ValidationError::Required));
    assert_eq!(errors.get("end"), Some(&ValidationError::Required));

    let errors = validate_date_range("2025-02-01", "2025-01-01").unwrap_err();
    assert_eq!(errors.get("start"), Some(&ValidationError::StartAfterEnd));
    assert!(!errors.contains_key("end"));

    let errors = validate_date_range("01/02/2025", "2025-01-01").unwrap_err();
    assert!(matches!(errors.get("start"), Some(ValidationError::InvalidFormat(_))));
}

#[test]
fn test_required_fields() {
    let errors = required([("name", "Ana"), ("email", "  "), ("run", "")]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    assert_eq!(errors.get("run"), Some(&ValidationError::Required));
    assert!(required([("name", "Ana")]).is_empty());
}

#[test]
fn test_format_errors_is_sorted() {
    let errors = required([("run", ""), ("email", "")]);
    assert_eq!(
        format_errors(&errors),
        "email: Este campo es obligatorio, run: Este campo es obligatorio"
    );
    assert_eq!(format_errors(&HashMap::new()), "");
}

#[test]
fn test_is_email() {
    assert!(is_email("ana@toolrent.cl"));
    assert!(is_email(" ana.perez@mail.example.com "));
    assert!(!is_email("ana"));
    assert!(!is_email("@toolrent.cl"));
    assert!(!is_email("ana@toolrent"));
    assert!(!is_email("ana@toolrent."));
    assert!(!is_email("ana@@toolrent.cl"));
    assert!(!is_email("ana perez@toolrent.cl"));
}
