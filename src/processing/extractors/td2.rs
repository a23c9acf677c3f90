use super::{line, LayoutExtractor, LayoutFields};
use crate::models::{CheckedField, DocumentFormat};
use crate::utils::chars::{char_at, safe_slice};
use crate::utils::ErrorLog;

/// Two lines of 36 characters.
pub struct Td2Extractor;

impl LayoutExtractor for Td2Extractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::TD2
    }

    fn extract(&self, lines: &[String], errors: &mut ErrorLog) -> LayoutFields {
        let line1 = line(lines, 0, errors);
        let line2 = line(lines, 1, errors);

        let composite = format!(
            "{}{}{}",
            safe_slice(line2, 0, 10),
            safe_slice(line2, 13, 20),
            safe_slice(line2, 21, 35)
        );

        LayoutFields {
            document_code: safe_slice(line1, 0, 2),
            issuing_country: safe_slice(line1, 2, 5),
            name: safe_slice(line1, 5, 36),
            document_number: CheckedField::new(safe_slice(line2, 0, 9), char_at(line2, 9)),
            nationality: safe_slice(line2, 10, 13),
            date_of_birth: CheckedField::new(safe_slice(line2, 13, 19), char_at(line2, 19)),
            sex: char_at(line2, 20),
            date_of_expiry: CheckedField::new(safe_slice(line2, 21, 27), char_at(line2, 27)),
            optional_data: safe_slice(line2, 28, 35),
            optional_data_2: None,
            personal_number: None,
            composite: CheckedField::new(composite, char_at(line2, 35)),
        }
    }
}
