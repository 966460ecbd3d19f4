/// Meeting-type abbreviations with a known expansion.
///
/// `TES` marks mislabeled test sessions.
pub const MEETING_TYPES: [(&str, &str); 5] = [
    ("LEC", "lecture"),
    ("REC", "recitation"),
    ("SEM", "seminar"),
    ("   ", "unknown"),
    ("TES", "unknown"),
];

fn meeting_type_label(code: &str) -> Option<&'static str> {
    MEETING_TYPES
        .iter()
        .find(|(abbrev, _)| *abbrev == code)
        .map(|(_, label)| *label)
}

/// Expand a meeting-type abbreviation.
///
/// Unhandled codes are returned unchanged.
pub fn expand_abbreviation(code: &str) -> &str {
    meeting_type_label(code).unwrap_or(code)
}

/// Whether [`expand_abbreviation`] has a mapping for `code`.
pub fn is_known_abbreviation(code: &str) -> bool {
    meeting_type_label(code).is_some()
}

/// Classify the catalog grading string.
///
/// Returns an empty string for grading schemes schedb has no name for.
pub fn classify_grade_type(raw: &str) -> &'static str {
    match raw {
        "" => "normal",
        "Satisfactory/Unsatisfactory" => "pass-fail",
        _ => "",
    }
}
