use super::{line, LayoutExtractor, LayoutFields};
use crate::models::{CheckedField, DocumentFormat};
use crate::utils::chars::{char_at, is_all_filler, safe_slice, FILLER};
use crate::utils::ErrorLog;

/// ID cards: three lines of 30 characters.
pub struct Td1Extractor;

impl LayoutExtractor for Td1Extractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::TD1
    }

    fn extract(&self, lines: &[String], errors: &mut ErrorLog) -> LayoutFields {
        let line1 = line(lines, 0, errors);
        let line2 = line(lines, 1, errors);
        let line3 = line(lines, 2, errors);

        let number_area = safe_slice(line1, 5, 30);
        let split = split_document_number(&number_area);
        let composite = format!(
            "{}{}{}{}",
            number_area,
            safe_slice(line2, 0, 7),
            safe_slice(line2, 8, 15),
            safe_slice(line2, 18, 29)
        );

        LayoutFields {
            document_code: safe_slice(line1, 0, 2),
            issuing_country: safe_slice(line1, 2, 5),
            name: safe_slice(line3, 0, 30),
            document_number: split.number,
            nationality: safe_slice(line2, 15, 18),
            date_of_birth: CheckedField::new(safe_slice(line2, 0, 6), char_at(line2, 6)),
            sex: char_at(line2, 7),
            date_of_expiry: CheckedField::new(safe_slice(line2, 8, 14), char_at(line2, 14)),
            optional_data: split.optional_data,
            optional_data_2: Some(safe_slice(line2, 18, 29)),
            personal_number: None,
            composite: CheckedField::new(composite, char_at(line2, 29)),
        }
    }
}

/// Document number and first optional data field of a TD1 line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Td1DocumentNumber {
    pub number: CheckedField,
    pub optional_data: String,
}

/// Separate the document number from the optional data in TD1 positions 6-30.
///
/// Numbers longer than nine characters put a filler in the check digit slot
/// and continue at the start of the optional data. This is a best-effort
/// heuristic: the contiguous run following the filler is taken as the
/// overflow, and its last character is the check digit only if it is a
/// digit. A non-digit ending leaves the number without a check digit.
pub fn split_document_number(area: &str) -> Td1DocumentNumber {
    let primary = safe_slice(area, 0, 9);
    let check = char_at(area, 9);
    let optional: Vec<char> = safe_slice(area, 10, 25).chars().collect();
    let overflow_len = optional.iter().take_while(|&&c| c != FILLER).count();

    if check != Some(FILLER) || is_all_filler(&primary) || overflow_len == 0 {
        return Td1DocumentNumber {
            number: CheckedField::new(primary, check),
            optional_data: optional.into_iter().collect(),
        };
    }

    let overflow = &optional[..overflow_len];
    let rest: String = optional[overflow_len..].iter().collect();
    let (extension, check_digit) = match overflow.split_last() {
        Some((last, head)) if last.is_ascii_digit() => (head, Some(*last)),
        _ => (overflow, None),
    };

    let mut number = primary;
    number.extend(extension.iter());
    Td1DocumentNumber {
        number: CheckedField::new(number, check_digit),
        optional_data: rest,
    }
}
