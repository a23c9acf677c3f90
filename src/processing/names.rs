use crate::utils::chars::FILLER;

/// Split an MRZ name field on the first `<<` into surname and given names.
pub fn split_name(field: &str) -> (String, String) {
    let (surname, given_names) = field.split_once("<<").unwrap_or((field, ""));
    (clean_name(surname), clean_name(given_names))
}

fn clean_name(part: &str) -> String {
    part.replace(FILLER, " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
