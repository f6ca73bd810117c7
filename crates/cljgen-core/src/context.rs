use serde::Serialize;

/// Generation-wide values shared by every rendered file.
///
/// Built once per run by [`crate::transform::metadata::resolve`] and only ever
/// handed out by shared reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationContext {
    pub project_name: String,
    /// Already escaped for embedding inside a string literal.
    pub project_description: String,
    pub project_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    pub base_namespace: String,
    pub api_package: String,
}
