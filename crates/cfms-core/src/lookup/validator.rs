//! Syntax checks for year and bill number input.
//!
//! Validation is pure and runs before any history write or network call.
//! A [`LookupRequest`] can only be obtained through [`LookupValidator::validate`].

use super::model::LookupRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern is a valid regex"));
static BILL_NO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,8}$").expect("bill number pattern is a valid regex"));

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupField {
    Year,
    BillNo,
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupField::Year => write!(f, "year"),
            LookupField::BillNo => write!(f, "bill number"),
        }
    }
}

/// Field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: LookupField,
    pub reason: String,
}

impl ValidationError {
    fn new(field: LookupField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Year and bill number taken from a single `"year-billNo"` string.
///
/// `bill_no` is only a candidate: it has not been checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedInput {
    pub year: String,
    pub bill_no: String,
}

/// Validator for lookup input.
pub struct LookupValidator;

impl LookupValidator {
    /// Validates raw year and bill number strings.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(raw_year: &str, raw_bill_no: &str) -> Result<LookupRequest, ValidationError> {
        Self::check_year(raw_year)?;
        Self::check_bill_no(raw_bill_no)?;
        Ok(LookupRequest::new_unchecked(raw_year, raw_bill_no))
    }

    /// Returns true if `value` is exactly 4 ASCII digits.
    pub fn is_valid_year(value: &str) -> bool {
        YEAR_PATTERN.is_match(value)
    }

    /// Returns true if `value` is 5 to 8 ASCII digits.
    pub fn is_valid_bill_no(value: &str) -> bool {
        BILL_NO_PATTERN.is_match(value)
    }

    /// Splits a combined `"2025-2358642"` string on the first `-`.
    ///
    /// Yields `None` when there is no `-` or the left part is not a year.
    /// Everything after the first `-` is kept verbatim as the bill number
    /// candidate, so `"2025-23-45"` gives `"23-45"`, which later fails
    /// [`LookupValidator::validate`].
    pub fn parse_combined(input: &str) -> Option<CombinedInput> {
        let (year, rest) = input.split_once('-')?;
        if !Self::is_valid_year(year) {
            return None;
        }
        Some(CombinedInput {
            year: year.to_string(),
            bill_no: rest.to_string(),
        })
    }

    fn check_year(value: &str) -> Result<(), ValidationError> {
        if Self::is_valid_year(value) {
            return Ok(());
        }
        Err(ValidationError::new(
            LookupField::Year,
            describe(value, "Year must be 4 digits"),
        ))
    }

    fn check_bill_no(value: &str) -> Result<(), ValidationError> {
        if Self::is_valid_bill_no(value) {
            return Ok(());
        }
        Err(ValidationError::new(
            LookupField::BillNo,
            describe(value, "Bill number must be 5 to 8 digits"),
        ))
    }
}

fn describe(value: &str, rule: &str) -> String {
    if value.is_empty() {
        format!("{rule} (value is empty)")
    } else if !value.chars().all(|c| c.is_ascii_digit()) {
        format!("{rule} (contains non-digit characters)")
    } else {
        format!("{rule} (got {} digits)", value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_request() {
        let request = LookupValidator::validate("2025", "2358642").unwrap();
        assert_eq!(request.year(), "2025");
        assert_eq!(request.bill_no(), "2358642");
    }

    #[test]
    fn test_bill_no_bounds() {
        assert!(LookupValidator::validate("2025", "12345").is_ok());
        assert!(LookupValidator::validate("2025", "12345678").is_ok());
        assert!(LookupValidator::validate("2025", "1234").is_err());
        assert!(LookupValidator::validate("2025", "123456789").is_err());
    }

    #[test]
    fn test_year_failure_names_field() {
        let err = LookupValidator::validate("20a5", "12345").unwrap_err();
        assert_eq!(err.field, LookupField::Year);
        assert!(err.reason.starts_with("Year must be 4 digits"));
        assert!(err.reason.contains("non-digit"));
    }

    #[test]
    fn test_bill_no_failure_names_field() {
        let err = LookupValidator::validate("2025", "123").unwrap_err();
        assert_eq!(err.field, LookupField::BillNo);
        assert!(err.reason.contains("got 3 digits"));

        let err = LookupValidator::validate("2025", "").unwrap_err();
        assert_eq!(err.field, LookupField::BillNo);
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn test_year_checked_before_bill_no() {
        let err = LookupValidator::validate("x", "y").unwrap_err();
        assert_eq!(err.field, LookupField::Year);
    }

    #[test]
    fn test_rejects_unicode_digits() {
        // Arabic-Indic digits are `\d` in Unicode regex mode
        assert!(!LookupValidator::is_valid_year("٢٠٢٥"));
        assert!(!LookupValidator::is_valid_bill_no("١٢٣٤٥"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(LookupValidator::validate(" 2025", "12345").is_err());
        assert!(LookupValidator::validate("2025", "12345\n").is_err());
    }

    #[test]
    fn test_parse_combined() {
        let parsed = LookupValidator::parse_combined("2025-2358642").unwrap();
        assert_eq!(parsed.year, "2025");
        assert_eq!(parsed.bill_no, "2358642");
    }

    #[test]
    fn test_parse_combined_rejects_bad_year() {
        assert!(LookupValidator::parse_combined("20255-123").is_none());
        assert!(LookupValidator::parse_combined("2358642").is_none());
        assert!(LookupValidator::parse_combined("-2358642").is_none());
    }

    #[test]
    fn test_parse_combined_keeps_extra_dashes() {
        let parsed = LookupValidator::parse_combined("2025-23-45").unwrap();
        assert_eq!(parsed.bill_no, "23-45");
        assert!(LookupValidator::validate(&parsed.year, &parsed.bill_no).is_err());
    }

    proptest! {
        #[test]
        fn prop_year_matches_four_ascii_digits(s in "\\PC{0,6}") {
            let expected = s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(LookupValidator::is_valid_year(&s), expected);
        }

        #[test]
        fn prop_bill_no_matches_five_to_eight_ascii_digits(s in "[0-9a-z-]{0,10}") {
            let expected = (5..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(LookupValidator::is_valid_bill_no(&s), expected);
        }

        #[test]
        fn prop_digit_strings_accepted(year in "[0-9]{4}", bill in "[0-9]{5,8}") {
            prop_assert!(LookupValidator::validate(&year, &bill).is_ok());
        }
    }
}
