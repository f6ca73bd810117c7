use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionError;

/// Top-level project configuration loaded from `cljgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CljgenConfig {
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub generator: GeneratorSettings,
}

impl Default for CljgenConfig {
    fn default() -> Self {
        Self {
            input: "api.yaml".to_string(),
            output: "generated".to_string(),
            generator: GeneratorSettings::default(),
        }
    }
}

/// Settings consumed by a generator run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Folder the namespace tree is rooted under.
    pub source_folder: String,
    pub options: GenerationOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            source_folder: "src".to_string(),
            options: GenerationOptions::default(),
        }
    }
}

/// Explicit overrides for the generation context. Anything left unset is
/// derived from the API metadata or defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub project_version: Option<String>,
    pub project_url: Option<String>,
    pub project_license_name: Option<String>,
    pub project_license_url: Option<String>,
    pub base_namespace: Option<String>,
}

impl GenerationOptions {
    /// Option keys, as accepted by [`GenerationOptions::set`].
    pub const KEYS: [&'static str; 7] = [
        "projectName",
        "projectDescription",
        "projectVersion",
        "projectUrl",
        "projectLicenseName",
        "projectLicenseUrl",
        "baseNamespace",
    ];

    /// Set a single option by its configuration key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), OptionError> {
        let slot = match key {
            "projectName" => &mut self.project_name,
            "projectDescription" => &mut self.project_description,
            "projectVersion" => &mut self.project_version,
            "projectUrl" => &mut self.project_url,
            "projectLicenseName" => &mut self.project_license_name,
            "projectLicenseUrl" => &mut self.project_license_url,
            "baseNamespace" => &mut self.base_namespace,
            other => return Err(OptionError::UnknownKey(other.to_string())),
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// Apply a `key=value` assignment, as given on the command line.
    pub fn apply_pair(&mut self, pair: &str) -> Result<(), OptionError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| OptionError::MalformedPair(pair.to_string()))?;
        self.set(key.trim(), value)
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "cljgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<CljgenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: CljgenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# cljgen configuration
input: api.yaml
output: generated
source_folder: src

options: {}
  # projectName: my-api-client        # default: dash-cased info title, or swagger-clj-client
  # projectDescription: My client     # default: info description, or "Client library of <projectName>"
  # projectVersion: 1.0.0             # default: info version, or 1.0.0
  # projectUrl: https://example.com   # default: contact url, omitted when absent
  # projectLicenseName: MIT           # default: license name, omitted when absent
  # projectLicenseUrl: https://opensource.org/licenses/MIT
  # baseNamespace: my-api-client      # default: dash-cased projectName
"#
}
