use crate::config::GenerationOptions;
use crate::context::GenerationContext;
use crate::escape::escape_literal;
use crate::model::ApiMetadata;
use crate::naming::dashize;

/// Project name used when neither an override nor a usable title exists.
pub const DEFAULT_PROJECT_NAME: &str = "swagger-clj-client";

/// Project version used when neither an override nor `info.version` exists.
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

/// Resolve the generation context from API metadata and explicit overrides.
///
/// Each field takes the override first, then the metadata-derived value, then a
/// default. `projectUrl` and the license fields have no default and stay absent.
pub fn resolve(metadata: &ApiMetadata, options: &GenerationOptions) -> GenerationContext {
    let project_name = options
        .project_name
        .clone()
        .or_else(|| {
            metadata
                .title
                .as_deref()
                .map(dashize)
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    let project_version = options
        .project_version
        .clone()
        .or_else(|| metadata.version.clone())
        .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string());

    // Depends on the resolved project name.
    let project_description = options
        .project_description
        .clone()
        .or_else(|| metadata.description.clone())
        .unwrap_or_else(|| format!("Client library of {project_name}"));

    let base_namespace = options
        .base_namespace
        .clone()
        .unwrap_or_else(|| dashize(&project_name));

    let project_url = options
        .project_url
        .clone()
        .or_else(|| metadata.contact.as_ref().and_then(|c| c.url.clone()));

    let license = metadata.license.as_ref();
    let license_name = options
        .project_license_name
        .clone()
        .or_else(|| license.and_then(|l| l.name.clone()));
    let license_url = options
        .project_license_url
        .clone()
        .or_else(|| license.and_then(|l| l.url.clone()));

    let api_package = format!("{base_namespace}.api");

    GenerationContext {
        project_name,
        project_description: escape_literal(&project_description),
        project_version,
        project_url,
        license_name,
        license_url,
        base_namespace,
        api_package,
    }
}
