use chrono::{Datelike, NaiveDate};

use crate::models::{
    ExpiryStatus, ExpiryValidationResult, ParsedRecord, ValidationIssue, ValidationIssueType,
};
use crate::utils::{MrzError, Result};

/// Which century rule applies to a two-digit MRZ year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    /// Never after the reference date.
    Birth,
    /// 20YY unless that is more than 50 years past the reference date.
    Expiry,
}

const EXPIRY_HORIZON_YEARS: i32 = 50;

pub struct ExpiryValidator;

impl ExpiryValidator {
    pub fn validate(record: &ParsedRecord, today: NaiveDate) -> ExpiryValidationResult {
        let status = Self::status(record, today);
        let mut issues = Vec::new();

        match status {
            ExpiryStatus::Valid { .. } => {}
            ExpiryStatus::Expired { days_ago } => issues.push(ValidationIssue::new(
                ValidationIssueType::Expiry,
                format!("Document expired {} day(s) ago", days_ago),
            )),
            ExpiryStatus::NoExpiry => issues.push(ValidationIssue::new(
                ValidationIssueType::Expiry,
                "Date of expiry is missing",
            )),
            ExpiryStatus::Unreadable => issues.push(ValidationIssue::new(
                ValidationIssueType::Expiry,
                "Invalid expiry date format",
            )),
        }

        ExpiryValidationResult {
            is_valid: matches!(status, ExpiryStatus::Valid { .. }),
            status,
            issues,
        }
    }

    pub fn status(record: &ParsedRecord, today: NaiveDate) -> ExpiryStatus {
        let Some(raw) = record.date_of_expiry.as_deref() else {
            return ExpiryStatus::NoExpiry;
        };
        match Self::parse_mrz_date(raw, DateKind::Expiry, today) {
            Ok(date) if date >= today => ExpiryStatus::Valid {
                days_remaining: date.signed_duration_since(today).num_days(),
            },
            Ok(date) => ExpiryStatus::Expired {
                days_ago: today.signed_duration_since(date).num_days(),
            },
            Err(_) => ExpiryStatus::Unreadable,
        }
    }

    pub fn birth_date(record: &ParsedRecord, reference: NaiveDate) -> Result<NaiveDate> {
        Self::parse_mrz_date(&record.date_of_birth, DateKind::Birth, reference)
    }

    pub fn expiry_date(record: &ParsedRecord, reference: NaiveDate) -> Result<NaiveDate> {
        let raw = record
            .date_of_expiry
            .as_deref()
            .ok_or_else(|| MrzError::InvalidDate("no date of expiry".to_string()))?;
        Self::parse_mrz_date(raw, DateKind::Expiry, reference)
    }

    /// Convert a YYMMDD MRZ date into a calendar date.
    pub fn parse_mrz_date(raw: &str, kind: DateKind, reference: NaiveDate) -> Result<NaiveDate> {
        let digits = raw
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .filter(|d| d.len() == 6)
            .ok_or_else(|| MrzError::InvalidDate(format!("{:?} is not a YYMMDD date", raw)))?;

        let yy = (digits[0] * 10 + digits[1]) as i32;
        let month = digits[2] * 10 + digits[3];
        let day = digits[4] * 10 + digits[5];

        let mut year = 2000 + yy;
        match kind {
            DateKind::Birth => {
                if (year, month, day) > (reference.year(), reference.month(), reference.day()) {
                    year -= 100;
                }
            }
            DateKind::Expiry => {
                if year > reference.year() + EXPIRY_HORIZON_YEARS {
                    year -= 100;
                }
            }
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| MrzError::InvalidDate(format!("{:?} is not a calendar date", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_expiring(raw: Option<&str>) -> ParsedRecord {
        ParsedRecord {
            date_of_expiry: raw.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_birth_century() {
        let today = date(2026, 10, 16);
        assert_eq!(
            ExpiryValidator::parse_mrz_date("690806", DateKind::Birth, today).unwrap(),
            date(1969, 8, 6)
        );
        assert_eq!(
            ExpiryValidator::parse_mrz_date("200101", DateKind::Birth, today).unwrap(),
            date(2020, 1, 1)
        );
        assert_eq!(
            ExpiryValidator::parse_mrz_date("261231", DateKind::Birth, today).unwrap(),
            date(1926, 12, 31)
        );
    }

    #[test]
    fn test_expiry_century() {
        let today = date(2026, 10, 16);
        assert_eq!(
            ExpiryValidator::parse_mrz_date("940623", DateKind::Expiry, today).unwrap(),
            date(1994, 6, 23)
        );
        assert_eq!(
            ExpiryValidator::parse_mrz_date("350101", DateKind::Expiry, today).unwrap(),
            date(2035, 1, 1)
        );
    }

    #[test]
    fn test_rejects_bad_dates() {
        let today = date(2026, 10, 16);
        for raw in ["991340", "990230", "A90806", "69080", "<<<<<<", ""] {
            let err = ExpiryValidator::parse_mrz_date(raw, DateKind::Birth, today).unwrap_err();
            assert!(matches!(err, MrzError::InvalidDate(_)), "raw {:?}", raw);
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(
            ExpiryValidator::status(&record_expiring(Some("300101")), date(2029, 12, 31)),
            ExpiryStatus::Valid { days_remaining: 1 }
        );
        assert_eq!(
            ExpiryValidator::status(&record_expiring(Some("250101")), date(2025, 1, 11)),
            ExpiryStatus::Expired { days_ago: 10 }
        );
        assert_eq!(
            ExpiryValidator::status(&record_expiring(None), date(2025, 1, 11)),
            ExpiryStatus::NoExpiry
        );
        assert_eq!(
            ExpiryValidator::status(&record_expiring(Some("251399")), date(2025, 1, 11)),
            ExpiryStatus::Unreadable
        );
    }

    #[test]
    fn test_validate_reports_expired_document() {
        let result = ExpiryValidator::validate(&record_expiring(Some("940623")), date(2026, 10, 16));
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Expiry);
        assert!(result.issues[0].message.starts_with("Document expired"));
    }

    #[test]
    fn test_record_dates() {
        let record = ParsedRecord {
            date_of_birth: "740812".to_string(),
            date_of_expiry: Some("120415".to_string()),
            ..Default::default()
        };
        let today = date(2026, 10, 16);
        assert_eq!(ExpiryValidator::birth_date(&record, today).unwrap(), date(1974, 8, 12));
        assert_eq!(ExpiryValidator::expiry_date(&record, today).unwrap(), date(2012, 4, 15));
        assert!(ExpiryValidator::expiry_date(&record_expiring(None), today).is_err());
    }
}
