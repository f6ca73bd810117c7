use cljgen_core::escape::strip_quotation_marks;

/// Opening of a `(comment ...)` form, which would swallow the code after it.
const COMMENT_OPENER: &str = "(comment";
const DEFUSED_COMMENT_OPENER: &str = "(_comment";

/// Escape text placed as a bare token in generated Clojure.
///
/// Double quotes are removed outright and `(comment` is defused. Lossy; use
/// [`cljgen_core::escape::escape_literal`] for text inside string literals.
pub fn escape_token(input: &str) -> String {
    escape_unsafe_characters(&strip_quotation_marks(input))
}

/// Defuse every `(comment` opener.
pub fn escape_unsafe_characters(input: &str) -> String {
    input.replace(COMMENT_OPENER, DEFUSED_COMMENT_OPENER)
}
