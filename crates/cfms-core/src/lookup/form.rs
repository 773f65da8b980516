//! Discrete year / bill number input state.

use super::model::LookupRequest;
use super::validator::{LookupValidator, ValidationError};

/// The two input fields a caller edits before submitting a lookup.
///
/// Pasting a combined `"2025-2358642"` string fills both fields through
/// [`LookupForm::apply_combined`]; partial or ambiguous input leaves them as
/// they are. Errors are only reported by [`LookupForm::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupForm {
    pub year: String,
    pub bill_no: String,
}

impl LookupForm {
    pub fn new(year: impl Into<String>, bill_no: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            bill_no: bill_no.into(),
        }
    }

    /// Tries to take year and bill number from one combined string.
    ///
    /// Returns `true` when both fields were replaced.
    pub fn apply_combined(&mut self, input: &str) -> bool {
        match LookupValidator::parse_combined(input) {
            Some(combined) => {
                self.year = combined.year;
                self.bill_no = combined.bill_no;
                true
            }
            None => false,
        }
    }

    /// Validates the current field values.
    ///
    /// # Errors
    ///
    /// Returns the field-level [`ValidationError`] of the first bad field.
    pub fn submit(&self) -> Result<LookupRequest, ValidationError> {
        LookupValidator::validate(&self.year, &self.bill_no)
    }

    /// Resets both fields, as done after a successful lookup.
    pub fn clear(&mut self) {
        self.year.clear();
        self.bill_no.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupField;

    #[test]
    fn test_apply_combined_updates_both_fields() {
        let mut form = LookupForm::default();
        assert!(form.apply_combined("2025-2358642"));
        assert_eq!(form, LookupForm::new("2025", "2358642"));
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_apply_combined_falls_back_silently() {
        let mut form = LookupForm::new("2024", "12345");
        assert!(!form.apply_combined("20255-123"));
        assert!(!form.apply_combined("no separator"));
        assert_eq!(form, LookupForm::new("2024", "12345"));
    }

    #[test]
    fn test_joined_remainder_fails_on_submit() {
        let mut form = LookupForm::default();
        assert!(form.apply_combined("2025-23-45"));
        assert_eq!(form.bill_no, "23-45");
        let err = form.submit().unwrap_err();
        assert_eq!(err.field, LookupField::BillNo);
    }

    #[test]
    fn test_clear() {
        let mut form = LookupForm::new("2025", "12345");
        form.clear();
        assert!(form.year.is_empty());
        assert!(form.bill_no.is_empty());
    }
}
