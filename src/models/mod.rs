pub mod data;
pub mod report;

pub use data::{CheckedField, DocumentFormat, DocumentType, ParsedRecord, Sex, Validity};
pub use report::{
    ExpiryStatus, ExpiryValidationResult, FormatValidationResult, ValidationIssue,
    ValidationIssueType,
};
