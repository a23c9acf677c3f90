use log::warn;

use crate::models::Validity;
use crate::utils::chars::{char_value, is_all_filler, FILLER};
use crate::utils::ErrorLog;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Detailed result of comparing a field against its check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Computed digit equals the expected one.
    Valid,
    /// Field and check digit are both empty or filler.
    NotApplicable,
    /// Field has data but no check digit was read.
    Missing,
    /// Field has data but the check digit is a filler.
    Ambiguous,
    Mismatch { expected: char, computed: u32 },
}

impl CheckOutcome {
    pub fn validity(&self) -> Validity {
        match self {
            CheckOutcome::Valid | CheckOutcome::NotApplicable => Validity::Valid,
            CheckOutcome::Missing | CheckOutcome::Mismatch { .. } => Validity::Invalid,
            CheckOutcome::Ambiguous => Validity::Indeterminate,
        }
    }

    /// Human readable problem description, `None` for passing outcomes.
    pub fn describe(&self, label: &str) -> Option<String> {
        match self {
            CheckOutcome::Valid | CheckOutcome::NotApplicable => None,
            CheckOutcome::Missing => Some(format!(
                "{}: check digit missing for non-empty field",
                label
            )),
            CheckOutcome::Ambiguous => Some(format!(
                "{}: check digit is a filler for a non-empty field, validity indeterminate",
                label
            )),
            CheckOutcome::Mismatch { expected, computed } => Some(format!(
                "{}: check digit mismatch (expected '{}', computed {})",
                label, expected, computed
            )),
        }
    }
}

/// ICAO 9303 weighted modulus 10 check digits.
pub struct Checksum;

impl Checksum {
    /// Sum of `char_value * weight` with weights 7, 3, 1 repeating, modulo 10.
    pub fn compute_check_digit(data: &str) -> u32 {
        let sum: u32 = data
            .chars()
            .zip(WEIGHTS.iter().cycle())
            .map(|(c, w)| char_value(c) * w)
            .sum();
        sum % 10
    }

    pub fn check(data: &str, expected: Option<char>) -> CheckOutcome {
        let data_empty = is_all_filler(data);
        match expected {
            None | Some(FILLER) if data_empty => CheckOutcome::NotApplicable,
            None => CheckOutcome::Missing,
            Some(FILLER) => CheckOutcome::Ambiguous,
            Some(digit) => {
                let computed = Self::compute_check_digit(data);
                // Check digits are 0-9 only; letters and OCR noise never match
                if digit.to_digit(10) == Some(computed) {
                    CheckOutcome::Valid
                } else {
                    CheckOutcome::Mismatch {
                        expected: digit,
                        computed,
                    }
                }
            }
        }
    }

    /// Run `check` and record any problem under `label`.
    pub fn validate(
        label: &str,
        data: &str,
        expected: Option<char>,
        errors: &mut ErrorLog,
    ) -> Validity {
        let outcome = Self::check(data, expected);
        if let Some(message) = outcome.describe(label) {
            warn!("{}", message);
            errors.push(message);
        }
        outcome.validity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::chars::digit_char;

    #[test]
    fn test_compute_known_digits() {
        assert_eq!(Checksum::compute_check_digit("L898902C<"), 3);
        assert_eq!(Checksum::compute_check_digit("690806"), 1);
        assert_eq!(Checksum::compute_check_digit("940623"), 6);
        assert_eq!(Checksum::compute_check_digit("ZE184226B<<<<<"), 1);
        assert_eq!(Checksum::compute_check_digit("D23145890"), 7);
    }

    #[test]
    fn test_compute_empty_is_zero() {
        assert_eq!(Checksum::compute_check_digit(""), 0);
        assert_eq!(Checksum::compute_check_digit("<<<<<<<<<"), 0);
    }

    #[test]
    fn test_computed_digit_always_validates() {
        let samples = ["", "0", "A", "L898902C<", "ZZZZZZZZZ", "123<ABC<<9", "D23145890734"];
        for data in samples {
            let digit = digit_char(Checksum::compute_check_digit(data));
            let outcome = Checksum::check(data, Some(digit));
            assert_eq!(outcome.validity(), Validity::Valid, "data {:?}", data);
        }
    }

    #[test]
    fn test_all_filler_is_not_applicable() {
        assert_eq!(Checksum::check("<<<<<<<<<", Some('<')), CheckOutcome::NotApplicable);
        assert_eq!(Checksum::check("<<<<<<<<<", None), CheckOutcome::NotApplicable);
        assert_eq!(Checksum::check("", None), CheckOutcome::NotApplicable);
        assert_eq!(CheckOutcome::NotApplicable.validity(), Validity::Valid);
    }

    #[test]
    fn test_missing_digit_is_invalid() {
        let mut errors = ErrorLog::default();
        let validity = Checksum::validate("document number", "L898902C<", None, &mut errors);
        assert_eq!(validity, Validity::Invalid);
        assert_eq!(errors.len(), 1);
        assert!(errors.messages()[0].contains("check digit missing"));
    }

    #[test]
    fn test_filler_digit_is_indeterminate() {
        let mut errors = ErrorLog::default();
        let validity = Checksum::validate("personal number", "ZE184226B<<<<<", Some('<'), &mut errors);
        assert_eq!(validity, Validity::Indeterminate);
        assert_eq!(errors.len(), 1);
        assert!(errors.messages()[0].contains("indeterminate"));
    }

    #[test]
    fn test_mismatch_reports_both_values() {
        let mut errors = ErrorLog::default();
        let validity = Checksum::validate("date of birth", "690806", Some('2'), &mut errors);
        assert_eq!(validity, Validity::Invalid);
        assert_eq!(
            errors.messages()[0],
            "date of birth: check digit mismatch (expected '2', computed 1)"
        );
    }

    #[test]
    fn test_letter_check_digit_never_matches() {
        let outcome = Checksum::check("<<<<<<", Some('O'));
        assert_eq!(outcome, CheckOutcome::Mismatch { expected: 'O', computed: 0 });
    }

    #[test]
    fn test_noise_check_digit_over_zero_data_mismatches() {
        for noise in ['*', '?', 'a', '«'] {
            let outcome = Checksum::check("<<<<<<", Some(noise));
            assert_eq!(
                outcome,
                CheckOutcome::Mismatch { expected: noise, computed: 0 },
                "check digit {:?}",
                noise
            );
            assert_eq!(outcome.validity(), Validity::Invalid);
        }
        assert_eq!(Checksum::check("<<<", Some('?')).validity(), Validity::Invalid);
    }

    #[test]
    fn test_filler_data_with_zero_digit_passes() {
        assert_eq!(Checksum::check("<<<<<<", Some('0')), CheckOutcome::Valid);
    }

    #[test]
    fn test_valid_records_no_error() {
        let mut errors = ErrorLog::default();
        let validity = Checksum::validate("date of expiry", "940623", Some('6'), &mut errors);
        assert_eq!(validity, Validity::Valid);
        assert!(errors.is_empty());
    }
}
