use super::{line, LayoutExtractor, LayoutFields};
use crate::models::{CheckedField, DocumentFormat};
use crate::utils::chars::{char_at, safe_slice};
use crate::utils::ErrorLog;

/// Passport booklets: two lines of 44 characters.
pub struct Td3Extractor;

impl LayoutExtractor for Td3Extractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::TD3
    }

    fn extract(&self, lines: &[String], errors: &mut ErrorLog) -> LayoutFields {
        let line1 = line(lines, 0, errors);
        let line2 = line(lines, 1, errors);

        let personal_number = safe_slice(line2, 28, 42);
        let composite = format!(
            "{}{}{}",
            safe_slice(line2, 0, 10),
            safe_slice(line2, 13, 20),
            safe_slice(line2, 21, 43)
        );

        LayoutFields {
            document_code: safe_slice(line1, 0, 2),
            issuing_country: safe_slice(line1, 2, 5),
            name: safe_slice(line1, 5, 44),
            document_number: CheckedField::new(safe_slice(line2, 0, 9), char_at(line2, 9)),
            nationality: safe_slice(line2, 10, 13),
            date_of_birth: CheckedField::new(safe_slice(line2, 13, 19), char_at(line2, 19)),
            sex: char_at(line2, 20),
            date_of_expiry: CheckedField::new(safe_slice(line2, 21, 27), char_at(line2, 27)),
            optional_data: personal_number.clone(),
            optional_data_2: None,
            personal_number: Some(CheckedField::new(personal_number, char_at(line2, 42))),
            composite: CheckedField::new(composite, char_at(line2, 43)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specimen() -> Vec<String> {
        vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO6908061F9406236ZE184226B<<<<<14".to_string(),
        ]
    }

    #[test]
    fn test_extract_specimen() {
        let fields = Td3Extractor.extract(&specimen(), &mut ErrorLog::default());

        assert_eq!(fields.document_code, "P<");
        assert_eq!(fields.issuing_country, "UTO");
        assert_eq!(fields.name, "ERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<");
        assert_eq!(fields.document_number, CheckedField::new("L898902C<", Some('3')));
        assert_eq!(fields.nationality, "UTO");
        assert_eq!(fields.date_of_birth, CheckedField::new("690806", Some('1')));
        assert_eq!(fields.sex, Some('F'));
        assert_eq!(fields.date_of_expiry, CheckedField::new("940623", Some('6')));
        assert_eq!(
            fields.personal_number,
            Some(CheckedField::new("ZE184226B<<<<<", Some('1')))
        );
        assert_eq!(fields.optional_data_2, None);
    }

    #[test]
    fn test_composite_boundaries() {
        let fields = Td3Extractor.extract(&specimen(), &mut ErrorLog::default());
        assert_eq!(fields.composite.data, "L898902C<369080619406236ZE184226B<<<<<1");
        assert_eq!(fields.composite.check_digit, Some('4'));
    }
}
