use log::debug;

use crate::models::DocumentFormat;
use crate::utils::chars::pad_line;
use crate::utils::{ErrorLog, MrzError, Result};

/// Picks the MRZ layout from line count and line lengths.
pub struct FormatDetector;

impl FormatDetector {
    pub fn detect(lines: &[String]) -> Result<DocumentFormat> {
        let all_at_least = |width: usize| lines.iter().all(|l| l.chars().count() >= width);

        let format = match lines.len() {
            2 if all_at_least(44) => DocumentFormat::TD3,
            3 if all_at_least(30) => DocumentFormat::TD1,
            2 if all_at_least(36) => DocumentFormat::TD2,
            2 => {
                debug!("Short two-line MRZ, assuming TD3");
                DocumentFormat::TD3
            }
            3 => {
                debug!("Short three-line MRZ, assuming TD1");
                DocumentFormat::TD1
            }
            n => return Err(MrzError::UnknownFormat { lines: n }),
        };

        debug!("Detected {:?} layout", format);
        Ok(format)
    }

    /// Right-pad every line with fillers to the layout's line width.
    ///
    /// Each padded line is logged, since its trailing fields were not read.
    pub fn canonical_lines(
        format: DocumentFormat,
        lines: &[String],
        errors: &mut ErrorLog,
    ) -> Vec<String> {
        let width = format.mrz_chars_per_line();
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let len = l.chars().count();
                if len < width {
                    errors.push(format!(
                        "line {} is short ({} of {} characters), padded with fillers",
                        i + 1,
                        len,
                        width
                    ));
                }
                pad_line(l, width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(lengths: &[usize]) -> Vec<String> {
        lengths.iter().map(|n| "A".repeat(*n)).collect()
    }

    #[test]
    fn test_full_length_layouts() {
        assert_eq!(FormatDetector::detect(&lines(&[44, 44])).unwrap(), DocumentFormat::TD3);
        assert_eq!(FormatDetector::detect(&lines(&[36, 36])).unwrap(), DocumentFormat::TD2);
        assert_eq!(FormatDetector::detect(&lines(&[30, 30, 30])).unwrap(), DocumentFormat::TD1);
    }

    #[test]
    fn test_one_short_line_falls_back_by_count() {
        assert_eq!(FormatDetector::detect(&lines(&[44, 40])).unwrap(), DocumentFormat::TD2);
        assert_eq!(FormatDetector::detect(&lines(&[44, 20])).unwrap(), DocumentFormat::TD3);
        assert_eq!(FormatDetector::detect(&lines(&[30, 29, 30])).unwrap(), DocumentFormat::TD1);
    }

    #[test]
    fn test_unsupported_line_count() {
        for count in [0, 1, 4, 5] {
            let err = FormatDetector::detect(&lines(&vec![44; count])).unwrap_err();
            assert!(matches!(err, MrzError::UnknownFormat { lines } if lines == count));
        }
    }

    #[test]
    fn test_canonical_lines_are_padded() {
        let mut errors = ErrorLog::default();
        let padded =
            FormatDetector::canonical_lines(DocumentFormat::TD1, &lines(&[30, 12, 0]), &mut errors);
        assert!(padded.iter().all(|l| l.chars().count() == 30));
        assert!(padded[1].ends_with("<<<<<<<<<<<<<<<<<<"));
        assert_eq!(
            errors.messages(),
            [
                "line 2 is short (12 of 30 characters), padded with fillers",
                "line 3 is short (0 of 30 characters), padded with fillers",
            ]
        );
    }

    #[test]
    fn test_full_and_long_lines_are_not_logged() {
        let mut errors = ErrorLog::default();
        let padded =
            FormatDetector::canonical_lines(DocumentFormat::TD3, &lines(&[44, 46]), &mut errors);
        assert_eq!(padded[1].chars().count(), 46);
        assert!(errors.is_empty());
    }
}
