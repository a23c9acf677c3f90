pub mod extractors;
pub mod format;
pub mod names;
pub mod normalize;

pub use extractors::{extractor_for, LayoutExtractor, LayoutFields};
pub use format::FormatDetector;
pub use names::split_name;
pub use normalize::{normalize_lines, MrzLines};
