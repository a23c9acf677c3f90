use log::debug;

use crate::models::ParsedRecord;
use crate::processing::extractors::extractor_for;
use crate::processing::normalize::normalize_lines;
use crate::processing::FormatDetector;
use crate::utils::ErrorLog;
use crate::validation::MrzValidator;

/// Entry point: OCR text in, checked `ParsedRecord` out.
///
/// Parsing is a pure function of the input. It never fails; callers inspect
/// `ParsedRecord::errors` and the validity flags instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct MrzParser;

impl MrzParser {
    pub fn new() -> Self {
        MrzParser
    }

    pub fn parse(&self, input: &str) -> ParsedRecord {
        // Step 1: Split and normalise the OCR lines
        let lines = normalize_lines(input);

        // Step 2: Pick the layout
        let format = match FormatDetector::detect(&lines.normalized) {
            Ok(format) => format,
            Err(err) => {
                debug!("Format detection failed: {}", err);
                return ParsedRecord {
                    raw_lines: lines.raw,
                    errors: vec![err.to_string()],
                    ..Default::default()
                };
            }
        };

        // Step 3: Slice fields at the layout's fixed offsets
        let mut errors = ErrorLog::default();
        let canonical = FormatDetector::canonical_lines(format, &lines.normalized, &mut errors);
        let fields = extractor_for(format).extract(&canonical, &mut errors);

        // Step 4: Check digits and final record
        MrzValidator::assemble(format, fields, lines.raw, errors)
    }
}

/// Shorthand for `MrzParser::new().parse(input)`.
pub fn parse_mrz(input: &str) -> ParsedRecord {
    MrzParser::new().parse(input)
}
