pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod mrz_parser;

pub use models::{DocumentType, ParsedRecord, Sex, Validity};
pub use mrz_parser::{parse_mrz, MrzParser};
pub use utils::MrzError;
