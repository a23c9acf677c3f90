use serde::{Deserialize, Serialize};

/// ICAO 9303 MRZ layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    TD1, // ID Card (85.6mm × 54.0mm)
    TD2, // ID Card (105.0mm × 74.0mm)
    TD3, // Passport (125.0mm × 88.0mm)
}

impl DocumentFormat {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            DocumentFormat::TD1 => (85.6, 54.0),  // mm
            DocumentFormat::TD2 => (105.0, 74.0), // mm
            DocumentFormat::TD3 => (125.0, 88.0), // mm
        }
    }

    pub fn mrz_lines(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 3,
            DocumentFormat::TD2 => 2,
            DocumentFormat::TD3 => 2,
        }
    }

    pub fn mrz_chars_per_line(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 30,
            DocumentFormat::TD2 => 36,
            DocumentFormat::TD3 => 44,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    TD1,
    TD2,
    TD3,
    #[default]
    Unknown,
}

impl DocumentType {
    pub fn format(&self) -> Option<DocumentFormat> {
        match self {
            DocumentType::TD1 => Some(DocumentFormat::TD1),
            DocumentType::TD2 => Some(DocumentFormat::TD2),
            DocumentType::TD3 => Some(DocumentFormat::TD3),
            DocumentType::Unknown => None,
        }
    }
}

impl From<DocumentFormat> for DocumentType {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::TD1 => DocumentType::TD1,
            DocumentFormat::TD2 => DocumentType::TD2,
            DocumentFormat::TD3 => DocumentType::TD3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Sex {
    pub fn from_mrz(c: Option<char>) -> Self {
        match c {
            Some('M') => Sex::Male,
            Some('F') => Sex::Female,
            _ => Sex::Unspecified,
        }
    }
}

/// Outcome of a check digit comparison.
///
/// `Indeterminate` is returned when the check digit itself is a filler
/// while the protected data is not, so neither pass nor fail applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Validity {
    Valid,
    Invalid,
    Indeterminate,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// A raw MRZ slice (fillers included) and the check digit protecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedField {
    pub data: String,
    pub check_digit: Option<char>,
}

impl CheckedField {
    pub fn new(data: impl Into<String>, check_digit: Option<char>) -> Self {
        CheckedField {
            data: data.into(),
            check_digit,
        }
    }
}

/// Structured result of one MRZ parse.
///
/// String fields are filler-stripped. Dates keep the six MRZ digits (YYMMDD);
/// calendar conversion lives in `ExpiryValidator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub document_type: DocumentType,
    pub document_code: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: String,
    pub document_number: String,
    pub document_number_check_digit: Option<char>,
    pub nationality: String,
    pub date_of_birth: String,
    pub date_of_birth_check_digit: Option<char>,
    pub sex: Sex,
    pub date_of_expiry: Option<String>,
    pub date_of_expiry_check_digit: Option<char>,
    /// TD3 personal number, TD2 optional data, TD1 first optional data field.
    pub optional_data: String,
    pub optional_data_check_digit: Option<char>,
    /// TD1 second-line optional data.
    pub optional_data_2: Option<String>,
    pub composite_check_digit: Option<char>,
    pub raw_lines: Vec<String>,
    pub errors: Vec<String>,
    pub document_number_valid: Option<Validity>,
    pub date_of_birth_valid: Option<Validity>,
    pub date_of_expiry_valid: Option<Validity>,
    pub optional_data_valid: Option<Validity>,
    pub composite_valid: Option<Validity>,
}

impl ParsedRecord {
    pub fn format(&self) -> Option<DocumentFormat> {
        self.document_type.format()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surname)
            .trim()
            .to_string()
    }

    /// True when the layout was recognised and every evaluated check digit,
    /// including the composite one, passed.
    pub fn is_valid(&self) -> bool {
        if self.document_type == DocumentType::Unknown {
            return false;
        }
        let flags = [
            self.document_number_valid,
            self.date_of_birth_valid,
            self.date_of_expiry_valid,
            self.optional_data_valid,
        ];
        self.composite_valid == Some(Validity::Valid)
            && flags.iter().flatten().all(Validity::is_valid)
    }
}
