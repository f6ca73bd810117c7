/// Escape free text for embedding inside a double-quoted string literal.
///
/// Surrounding whitespace is trimmed, then backslashes and double quotes are
/// escaped. No information is lost.
pub fn escape_literal(input: &str) -> String {
    input.trim().replace('\\', "\\\\").replace('"', "\\\"")
}

/// Fold line breaks and runs of whitespace into single spaces, so the text
/// stays on one line.
pub fn single_line(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every double quote from `input`.
pub fn strip_quotation_marks(input: &str) -> String {
    input.replace('"', "")
}
