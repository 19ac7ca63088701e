use std::{collections::HashMap, fmt};

use chrono::NaiveDate;

/// Form-level validation errors shown next to inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    TooShort(usize),
    InvalidFormat(String),
    StartAfterEnd,
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "Este campo es obligatorio"),
            ValidationError::TooShort(min) => write!(f, "Debe tener al menos {} caracteres", min),
            ValidationError::InvalidFormat(msg) => write!(f, "Formato inválido: {}", msg),
            ValidationError::StartAfterEnd => {
                write!(f, "La fecha de inicio no puede ser posterior a la fecha de término")
            }
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Format a Chilean RUN as the user types it.
///
/// Everything but digits and the `k` verifier is dropped, the body is grouped
/// in thousands with dots and the verifier goes after a dash, uppercased:
/// `"123456785"` -> `"12.345.678-5"`.
///
/// A dot only goes in front of a digit run whose length up to the next
/// non-digit is a multiple of three, so a stray `k` inside the body splits
/// the grouping: `"123456k7"` -> `"123.456k-7"`.
pub fn format_run(input: &str) -> String {
    let cleaned: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'k' | 'K'))
        .collect();

    if cleaned.len() <= 1 {
        return cleaned.into_iter().collect();
    }

    let (body, verifier) = cleaned.split_at(cleaned.len() - 1);
    let mut grouped = String::with_capacity(cleaned.len() + body.len() / 3 + 1);
    for (i, c) in body.iter().enumerate() {
        let run = body[i..].iter().take_while(|c| c.is_ascii_digit()).count();
        if i > 0 && run > 0 && run % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped.push('-');
    grouped.extend(verifier.iter().map(|c| c.to_ascii_uppercase()));
    grouped
}

/// Keep only ASCII digits of a typed amount.
pub fn sanitize_amount(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a non-negative whole amount, ignoring surrounding whitespace.
pub fn parse_amount(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Check a report date range given as `YYYY-MM-DD` inputs.
pub fn validate_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), HashMap<String, ValidationError>> {
    let mut errors = HashMap::new();

    let parse = |field: &str, value: &str, errors: &mut HashMap<String, ValidationError>| {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), ValidationError::Required);
            return None;
        }
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(
                    field.to_string(),
                    ValidationError::InvalidFormat("se espera AAAA-MM-DD".to_string()),
                );
                None
            }
        }
    };

    let start_date = parse("start", start, &mut errors);
    let end_date = parse("end", end, &mut errors);

    match (start_date, end_date) {
        (Some(start), Some(end)) if start <= end => Ok((start, end)),
        (Some(_), Some(_)) => {
            errors.insert("start".to_string(), ValidationError::StartAfterEnd);
            Err(errors)
        }
        _ => Err(errors),
    }
}

/// Minimum length of a new employee's password.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Loose e-mail shape check: a local part, `@`, and a dotted domain.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

/// Collect `Required` errors for every blank `(field, value)` pair.
pub fn required<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> HashMap<String, ValidationError> {
    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| (field.to_string(), ValidationError::Required))
        .collect()
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    let mut entries: Vec<_> = errors.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
