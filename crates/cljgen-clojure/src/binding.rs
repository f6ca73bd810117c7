use cljgen_core::binding::{LanguageBinding, NameRole, SupportingFile};
use cljgen_core::context::GenerationContext;
use cljgen_core::model::SchemaType;
use cljgen_core::transform::plan::source_segments;

use crate::{escape, namespace, naming, type_mapper};

pub const API_TEMPLATE: &str = "api";
pub const PROJECT_TEMPLATE: &str = "project";
pub const CORE_TEMPLATE: &str = "core";
pub const SPECS_TEMPLATE: &str = "specs";
pub const GIT_PUSH_TEMPLATE: &str = "git_push";
pub const GITIGNORE_TEMPLATE: &str = "gitignore";

/// Clojure client conventions: `clojure.spec` validators, dash-case names,
/// underscore folders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClojureBinding;

impl LanguageBinding for ClojureBinding {
    fn map_type(&self, schema_type: &SchemaType) -> String {
        type_mapper::map_type(schema_type)
    }

    fn to_identifier(&self, raw: &str, role: NameRole) -> String {
        naming::to_identifier(raw, role)
    }

    fn to_api_filename(&self, name: &str) -> String {
        naming::to_api_filename(name)
    }

    fn sanitize_tag(&self, tag: &str) -> String {
        naming::sanitize_tag(tag)
    }

    fn resolve_folder(&self, namespace: &str) -> Vec<String> {
        namespace::resolve_folder(namespace)
    }

    fn escape_token(&self, input: &str) -> String {
        escape::escape_token(input)
    }

    fn api_template_id(&self) -> &str {
        API_TEMPLATE
    }

    fn api_file_extension(&self) -> &str {
        "clj"
    }

    fn supporting_files(
        &self,
        context: &GenerationContext,
        source_folder: &str,
    ) -> Vec<SupportingFile> {
        let mut namespace_folder = source_segments(source_folder);
        namespace_folder.extend(self.resolve_folder(&context.base_namespace));

        vec![
            SupportingFile::new(PROJECT_TEMPLATE, Vec::new(), "project.clj"),
            SupportingFile::new(CORE_TEMPLATE, namespace_folder.clone(), "core.clj"),
            SupportingFile::new(SPECS_TEMPLATE, namespace_folder, "specs.clj"),
            SupportingFile::new(GIT_PUSH_TEMPLATE, Vec::new(), "git_push.sh"),
            SupportingFile::new(GITIGNORE_TEMPLATE, Vec::new(), ".gitignore"),
        ]
    }
}
