pub mod checksum;
pub mod expiry;
pub mod format;
pub mod mrz;

pub use checksum::{CheckOutcome, Checksum};
pub use expiry::{DateKind, ExpiryValidator};
pub use format::FormatValidator;
pub use mrz::MrzValidator;
