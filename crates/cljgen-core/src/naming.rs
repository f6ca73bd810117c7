use heck::ToKebabCase;

/// Convert a word to lower-case, hyphen-separated form.
///
/// camelCase, PascalCase, snake_case and space-separated words all land on the
/// same output; anything that is not a letter or digit acts as a word break.
pub fn dashize(word: &str) -> String {
    word.to_kebab_case()
}
