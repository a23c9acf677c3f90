pub mod chars;
pub mod diagnostics;
pub mod error;

pub use diagnostics::ErrorLog;
pub use error::{MrzError, Result};
