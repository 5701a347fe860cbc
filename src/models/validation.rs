//! Field checks applied before any record is written

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Accepts `12`, `12.3` and `12.34`. Signs, exponents, and a third
/// fractional digit are rejected.
pub fn validate_amount(input: &str) -> TrackerResult<String> {
    let amount = input.trim();
    if amount.is_empty() {
        return Err(TrackerError::Validation("amount is required".into()));
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (amount, None),
    };

    let digits_only = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !digits_only(whole) {
        return Err(TrackerError::Validation(format!(
            "'{}' is not a valid amount; use a non-negative number like 12 or 12.50",
            amount
        )));
    }

    if let Some(fraction) = fraction {
        if !digits_only(fraction) || fraction.len() > 2 {
            return Err(TrackerError::Validation(format!(
                "'{}' is not a valid amount; at most two decimal places are allowed",
                amount
            )));
        }
    }

    Ok(amount.to_string())
}

/// Strict `YYYY-MM-DD` that must also name a real calendar day
pub fn validate_date(input: &str) -> TrackerResult<String> {
    let date = input.trim();
    let bytes = date.as_bytes();

    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shape_ok {
        return Err(TrackerError::Validation(format!(
            "'{}' is not in YYYY-MM-DD format",
            date
        )));
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("'{}' is not a real calendar date", date))
    })?;

    Ok(date.to_string())
}

/// Surrounding whitespace is trimmed before the length check, and the
/// trimmed text is what gets stored.
pub fn validate_description(input: &str) -> TrackerResult<String> {
    let description = input.trim();
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TrackerError::Validation(format!(
            "description is {} characters long; the limit is {}",
            len, MAX_DESCRIPTION_LEN
        )));
    }
    Ok(description.to_string())
}

/// Categories are free text
pub fn normalize_category(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_boundaries() {
        assert_eq!(validate_amount("12.34").unwrap(), "12.34");
        assert_eq!(validate_amount("0").unwrap(), "0");
        assert_eq!(validate_amount(" 20.5 ").unwrap(), "20.5");
        assert!(validate_amount("12.345").unwrap_err().is_validation());
        assert!(validate_amount("-1").is_err());
    }

    #[test]
    fn test_amount_rejects_malformed() {
        for input in ["", "   ", "abc", "12.", ".5", "1e3", "+3", "1.2.3", "12,50"] {
            assert!(validate_amount(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_date_boundaries() {
        assert!(validate_date("2024-02-29").is_ok());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("2024-02-30").is_err());
        assert_eq!(validate_date("2024-03-01").unwrap(), "2024-03-01");
    }

    #[test]
    fn test_date_rejects_loose_formats() {
        for input in ["2024-3-1", "24-03-01", "2024/03/01", "20240301", "2024-03-01T00:00", ""] {
            assert!(validate_date(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_description_length() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);
        assert_eq!(validate_description(&fifty).unwrap(), fifty);
        assert!(validate_description(&fifty_one).unwrap_err().is_validation());
    }

    #[test]
    fn test_description_limit_applies_after_trim() {
        let fifty = "x".repeat(MAX_DESCRIPTION_LEN);
        let padded = format!("  {} ", fifty);
        assert_eq!(validate_description(&padded).unwrap(), fifty);
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        let accented = "é".repeat(50);
        assert!(validate_description(&accented).is_ok());
    }

    #[test]
    fn test_category_is_trimmed() {
        assert_eq!(normalize_category("  food "), "food");
    }
}
