//! Value formatting for display

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use coc_record::{CanonicalRecord, FieldId};

/// Parse an ISO date, date-time or RFC 3339 timestamp to its calendar date
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a date value as `MM/DD/YYYY`
///
/// Values that do not parse as a date are returned unchanged.
pub fn format_date_mmddyyyy(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format("%m/%d/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Display text for a mapped field, or `None` when there is nothing to draw
///
/// Empty and whitespace-only values are skipped. Fields whose path names a
/// date are reformatted.
pub fn display_value(field: FieldId, record: &CanonicalRecord) -> Option<String> {
    let value = field.value(record);
    if value.trim().is_empty() {
        return None;
    }

    if field.is_date() {
        Some(format_date_mmddyyyy(value))
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_date_mmddyyyy("1990-05-01"), "05/01/1990");
        assert_eq!(format_date_mmddyyyy(" 2024-12-31 "), "12/31/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_date_mmddyyyy("2025-03-07T14:05:09"), "03/07/2025");
        assert_eq!(format_date_mmddyyyy("2025-03-07T14:05:09.250"), "03/07/2025");
        assert_eq!(format_date_mmddyyyy("2025-03-07T14:05:09Z"), "03/07/2025");
    }

    #[test]
    fn test_unparseable_date_is_kept() {
        assert_eq!(format_date_mmddyyyy("May 1, 1990"), "May 1, 1990");
        assert_eq!(format_date_mmddyyyy("2025-13-40"), "2025-13-40");
        assert_eq!(format_date_mmddyyyy(""), "");
    }

    #[test]
    fn test_display_value() {
        let mut record = CanonicalRecord::default();
        record.personal_info.date_of_birth = "1990-05-01".to_string();
        record.affidavit.subject_date_of_birth = "1990-05-01".to_string();
        record.personal_info.religion = "  ".to_string();
        record.personal_info.tribe = "B'laan".to_string();

        assert_eq!(
            display_value(FieldId::DateOfBirth, &record).as_deref(),
            Some("1990-05-01")
        );
        assert_eq!(
            display_value(FieldId::SubjectDateOfBirth, &record).as_deref(),
            Some("05/01/1990")
        );
        assert_eq!(display_value(FieldId::Religion, &record), None);
        assert_eq!(display_value(FieldId::Sex, &record), None);
        assert_eq!(
            display_value(FieldId::Tribe, &record).as_deref(),
            Some("B'laan")
        );
    }
}
