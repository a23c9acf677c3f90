// Character level helpers shared by the extractors and the checksum engine.
// Every accessor tolerates short or malformed lines and never panics.

use log::warn;

/// The MRZ filler character.
pub const FILLER: char = '<';

/// Numeric value of an MRZ character for check digit arithmetic.
///
/// `0-9` map to themselves, `A-Z` to 10..=35 and the filler to 0.
/// Anything else is an OCR anomaly: it is logged and counted as 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        FILLER => 0,
        other => {
            warn!("Unexpected MRZ character {:?}, counted as 0", other);
            0
        }
    }
}

/// Substring by character positions `[start, end)`.
/// Returns an empty string when the range does not fit inside `s`.
pub fn safe_slice(s: &str, start: usize, end: usize) -> String {
    if start > end || end > s.chars().count() {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}

/// Character at position `i`, or `None` when out of range.
pub fn char_at(s: &str, i: usize) -> Option<char> {
    s.chars().nth(i)
}

/// Trim fillers from both ends of a field.
pub fn strip_filler(s: &str) -> String {
    s.trim_matches(FILLER).to_string()
}

/// True for an empty field or one made only of fillers.
pub fn is_all_filler(s: &str) -> bool {
    s.chars().all(|c| c == FILLER)
}

/// Right-pad `line` with fillers up to `width` characters.
pub fn pad_line(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let mut padded = String::with_capacity(width);
    padded.push_str(line);
    padded.extend(std::iter::repeat(FILLER).take(width - len));
    padded
}

/// Character for a single decimal digit (0..=9).
pub fn digit_char(d: u32) -> char {
    std::char::from_digit(d % 10, 10).unwrap_or('0')
}
