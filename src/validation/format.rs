use crate::models::{
    DocumentType, FormatValidationResult, ParsedRecord, Sex, ValidationIssue, ValidationIssueType,
};
use crate::processing::normalize_lines;

/// Character-class audit of a parsed record. Advisory only: the record
/// and its error list are left untouched.
pub struct FormatValidator;

impl FormatValidator {
    pub fn validate(record: &ParsedRecord) -> FormatValidationResult {
        let mut issues = Vec::new();
        let mut issue = |message: String| {
            issues.push(ValidationIssue::new(ValidationIssueType::Format, message));
        };

        if record.document_type == DocumentType::Unknown {
            issue("MRZ layout could not be determined".to_string());
            return FormatValidationResult {
                is_valid: false,
                issues,
            };
        }

        if !record
            .document_code
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
        {
            issue(format!(
                "Document code {:?} does not start with a letter",
                record.document_code
            ));
        }

        for (label, code) in [
            ("Issuing country", &record.issuing_country),
            ("Nationality", &record.nationality),
        ] {
            if !is_country_code(code) {
                issue(format!("{} code {:?} is not alphabetic", label, code));
            }
        }

        if record.document_number.is_empty() {
            issue("Document number is missing".to_string());
        }

        if record.surname.is_empty() {
            issue("Surname is missing".to_string());
        }

        if !is_plausible_date(&record.date_of_birth) {
            issue(format!(
                "Date of birth {:?} is not a YYMMDD date",
                record.date_of_birth
            ));
        }

        match record.date_of_expiry.as_deref() {
            Some(expiry) if !is_plausible_date(expiry) => {
                issue(format!("Date of expiry {:?} is not a YYMMDD date", expiry));
            }
            Some(_) => {}
            None => issue("Date of expiry is missing".to_string()),
        }

        if record.sex == Sex::Unspecified {
            if let Some(c) = sex_character(record).filter(|c| *c != '<' && *c != 'X') {
                issue(format!("Sex character {:?} is not M, F, X or <", c));
            }
        }

        FormatValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

// Codes are 1-3 letters once fillers are stripped ("D" for Germany).
fn is_country_code(code: &str) -> bool {
    (1..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_uppercase() || c == '<')
}

fn is_plausible_date(raw: &str) -> bool {
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let month: u32 = raw[2..4].parse().unwrap_or(0);
    let day: u32 = raw[4..6].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn sex_character(record: &ParsedRecord) -> Option<char> {
    let (line, position) = match record.document_type {
        DocumentType::TD1 => (1, 7),
        DocumentType::TD2 | DocumentType::TD3 => (1, 20),
        DocumentType::Unknown => return None,
    };
    normalize_lines(&record.raw_lines.join("\n"))
        .normalized
        .get(line)
        .and_then(|l| l.chars().nth(position))
}
