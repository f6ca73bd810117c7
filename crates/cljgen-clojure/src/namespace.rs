use std::fmt;

/// A namespace in its canonical, logical form (`acme.pet-store.api`).
///
/// The physical folder form is always derived from this value, never stored
/// beside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(canonical: impl Into<String>) -> Self {
        Namespace(canonical.into())
    }

    /// Dot-separated, dash-cased form used in `ns` declarations.
    pub fn logical(&self) -> &str {
        &self.0
    }

    /// Folder segments: split on `.`, hyphens replaced with underscores.
    pub fn physical_segments(&self) -> Vec<String> {
        self.0
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.replace('-', "_"))
            .collect()
    }

}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve a logical namespace to folder segments.
pub fn resolve_folder(namespace: &str) -> Vec<String> {
    Namespace::new(namespace).physical_segments()
}
