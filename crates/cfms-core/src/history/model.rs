//! HistoryEntry domain model.

use crate::lookup::{LookupRequest, LookupValidator, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown for entries the user has not named.
pub const UNNAMED_LABEL: &str = "Unnamed Bill";

/// One remembered lookup.
///
/// Persisted as `{"year", "billNo", "name", "createdAt"}` with `createdAt`
/// in epoch milliseconds. Older payloads stored the time as `timestamp` and
/// had no `name`; both are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub year: String,
    pub bill_no: String,
    /// User label, may be empty
    #[serde(default)]
    pub name: String,
    #[serde(alias = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an unnamed entry for a validated request.
    pub fn from_request(request: &LookupRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            year: request.year().to_string(),
            bill_no: request.bill_no().to_string(),
            name: String::new(),
            created_at,
        }
    }

    /// Re-validates year and bill number, e.g. for entries read from disk.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first bad field.
    pub fn to_request(&self) -> Result<LookupRequest, ValidationError> {
        LookupValidator::validate(&self.year, &self.bill_no)
    }

    /// `year-billNo`
    pub fn bill_number(&self) -> String {
        format!("{}-{}", self.year, self.bill_no)
    }

    /// The user label, or a placeholder when empty.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED_LABEL
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_field_names() {
        let request = LookupValidator::validate("2025", "2358642").unwrap();
        let created_at = Utc.timestamp_millis_opt(1_735_689_600_000).unwrap();
        let entry = HistoryEntry::from_request(&request, created_at);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["year"], "2025");
        assert_eq!(json["billNo"], "2358642");
        assert_eq!(json["name"], "");
        assert_eq!(json["createdAt"], 1_735_689_600_000i64);
    }

    #[test]
    fn test_reads_legacy_timestamp_without_name() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"year":"2025","billNo":"12345","timestamp":1700000000000}"#)
                .unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(entry.label(), UNNAMED_LABEL);
        assert_eq!(entry.bill_number(), "2025-12345");
    }

    #[test]
    fn test_label_prefers_name() {
        let mut entry: HistoryEntry = serde_json::from_str(
            r#"{"year":"2025","billNo":"12345","name":"","createdAt":0}"#,
        )
        .unwrap();
        entry.name = "Office rent".to_string();
        assert_eq!(entry.label(), "Office rent");
    }
}
