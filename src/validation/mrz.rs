use log::debug;

use crate::models::{DocumentFormat, ParsedRecord, Sex};
use crate::processing::extractors::LayoutFields;
use crate::processing::names::split_name;
use crate::utils::chars::strip_filler;
use crate::utils::ErrorLog;
use crate::validation::Checksum;

/// Builds the final record from extracted slices and runs every check digit.
pub struct MrzValidator;

impl MrzValidator {
    pub fn assemble(
        format: DocumentFormat,
        fields: LayoutFields,
        raw_lines: Vec<String>,
        mut errors: ErrorLog,
    ) -> ParsedRecord {
        let document_number_valid = Checksum::validate(
            "document number",
            &fields.document_number.data,
            fields.document_number.check_digit,
            &mut errors,
        );
        let date_of_birth_valid = Checksum::validate(
            "date of birth",
            &fields.date_of_birth.data,
            fields.date_of_birth.check_digit,
            &mut errors,
        );
        let date_of_expiry_valid = Checksum::validate(
            "date of expiry",
            &fields.date_of_expiry.data,
            fields.date_of_expiry.check_digit,
            &mut errors,
        );
        let optional_data_valid = fields.personal_number.as_ref().map(|personal| {
            Checksum::validate(
                "personal number",
                &personal.data,
                personal.check_digit,
                &mut errors,
            )
        });
        let composite_valid = Checksum::validate(
            "composite",
            &fields.composite.data,
            fields.composite.check_digit,
            &mut errors,
        );

        let (surname, given_names) = split_name(&fields.name);
        let date_of_expiry = Some(strip_filler(&fields.date_of_expiry.data)).filter(|d| !d.is_empty());

        debug!(
            "Assembled {:?} record with {} error(s)",
            format,
            errors.len()
        );

        ParsedRecord {
            document_type: format.into(),
            document_code: strip_filler(&fields.document_code),
            issuing_country: strip_filler(&fields.issuing_country),
            surname,
            given_names,
            document_number: strip_filler(&fields.document_number.data),
            document_number_check_digit: fields.document_number.check_digit,
            nationality: strip_filler(&fields.nationality),
            date_of_birth: strip_filler(&fields.date_of_birth.data),
            date_of_birth_check_digit: fields.date_of_birth.check_digit,
            sex: Sex::from_mrz(fields.sex),
            date_of_expiry,
            date_of_expiry_check_digit: fields.date_of_expiry.check_digit,
            optional_data: strip_filler(&fields.optional_data),
            optional_data_check_digit: fields.personal_number.and_then(|p| p.check_digit),
            optional_data_2: fields.optional_data_2.map(|d| strip_filler(&d)),
            composite_check_digit: fields.composite.check_digit,
            raw_lines,
            errors: errors.into_vec(),
            document_number_valid: Some(document_number_valid),
            date_of_birth_valid: Some(date_of_birth_valid),
            date_of_expiry_valid: Some(date_of_expiry_valid),
            optional_data_valid,
            composite_valid: Some(composite_valid),
        }
    }
}
