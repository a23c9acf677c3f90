use crate::utils::chars::FILLER;

/// OCR text split into MRZ lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MrzLines {
    /// Non-blank input lines exactly as received.
    pub raw: Vec<String>,
    /// Trimmed lines with interior spaces turned into fillers.
    pub normalized: Vec<String>,
}

/// Split OCR output into lines, drop blank ones and normalise the rest.
pub fn normalize_lines(input: &str) -> MrzLines {
    let mut lines = MrzLines::default();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        lines.raw.push(line.to_string());
        lines.normalized.push(line.trim().replace(' ', &FILLER.to_string()));
    }
    lines
}
