//! Fixed-offset field extraction, one extractor per ICAO 9303 layout.
//!
//! Extractors only slice: every value they return is the raw MRZ text,
//! fillers included, so the validator can feed it straight into the
//! checksum engine. Lines are expected to be padded to the layout width
//! first (see `FormatDetector::canonical_lines`). A missing line is logged
//! and read as empty, so its fields come back as empty slices.

mod td1;
mod td2;
mod td3;

pub use td1::{split_document_number, Td1DocumentNumber, Td1Extractor};
pub use td2::Td2Extractor;
pub use td3::Td3Extractor;

use crate::models::{CheckedField, DocumentFormat};
use crate::utils::ErrorLog;

/// Raw slices of one MRZ, common to all layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutFields {
    pub document_code: String,
    pub issuing_country: String,
    pub name: String,
    pub document_number: CheckedField,
    pub nationality: String,
    pub date_of_birth: CheckedField,
    pub sex: Option<char>,
    pub date_of_expiry: CheckedField,
    pub optional_data: String,
    /// Second optional data field, TD1 only.
    pub optional_data_2: Option<String>,
    /// Check-digit protected personal number, TD3 only.
    pub personal_number: Option<CheckedField>,
    /// Concatenation covered by the composite check digit.
    pub composite: CheckedField,
}

pub trait LayoutExtractor {
    fn format(&self) -> DocumentFormat;

    fn extract(&self, lines: &[String], errors: &mut ErrorLog) -> LayoutFields;
}

pub fn extractor_for(format: DocumentFormat) -> &'static dyn LayoutExtractor {
    match format {
        DocumentFormat::TD1 => &Td1Extractor,
        DocumentFormat::TD2 => &Td2Extractor,
        DocumentFormat::TD3 => &Td3Extractor,
    }
}

fn line<'a>(lines: &'a [String], index: usize, errors: &mut ErrorLog) -> &'a str {
    match lines.get(index) {
        Some(l) => l.as_str(),
        None => {
            errors.push(format!("line {} is missing", index + 1));
            ""
        }
    }
}
