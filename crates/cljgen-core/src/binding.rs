use crate::context::GenerationContext;
use crate::error::GenerateError;
use crate::escape;
use crate::model::SchemaType;

/// The naming role an identifier is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRole {
    ModelName,
    VarName,
    OperationId,
    ApiName,
}

/// A fixed file emitted on every run regardless of the API content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingFile {
    pub template_id: String,
    /// Folder segments relative to the output root.
    pub folder: Vec<String>,
    pub file_name: String,
}

impl SupportingFile {
    pub fn new(template_id: &str, folder: Vec<String>, file_name: &str) -> Self {
        Self {
            template_id: template_id.to_string(),
            folder,
            file_name: file_name.to_string(),
        }
    }
}

/// Everything the generation pipeline needs to know about one target ecosystem.
///
/// Each capability is an independent function; the pipeline in
/// [`crate::transform`] is written once against this trait.
pub trait LanguageBinding: Send + Sync {
    /// Map an abstract schema type to a target type or validator expression.
    fn map_type(&self, schema_type: &SchemaType) -> String;

    /// Sanitize a raw name into a target identifier for the given role.
    /// May return an empty string.
    fn to_identifier(&self, raw: &str, role: NameRole) -> String;

    /// Turn an API name into a bare file name (without extension).
    fn to_api_filename(&self, name: &str) -> String;

    /// Normalize a raw tag before it is used to group operations.
    fn sanitize_tag(&self, tag: &str) -> String;

    /// Resolve a logical namespace to physical path segments.
    fn resolve_folder(&self, namespace: &str) -> Vec<String>;

    /// Escape text for use inside a quoted string literal.
    fn escape_literal(&self, input: &str) -> String {
        escape::escape_literal(input)
    }

    /// Escape text for use as a bare token. Lossy.
    fn escape_token(&self, input: &str) -> String;

    /// Template used for each API grouping.
    fn api_template_id(&self) -> &str;

    /// Extension of generated API source files, without the dot.
    fn api_file_extension(&self) -> &str;

    /// The supporting files for a resolved context.
    fn supporting_files(
        &self,
        context: &GenerationContext,
        source_folder: &str,
    ) -> Vec<SupportingFile>;

    fn to_var_name(&self, raw: &str) -> String {
        self.to_identifier(raw, NameRole::VarName)
    }

    fn to_param_name(&self, raw: &str) -> String {
        self.to_var_name(raw)
    }

    fn to_model_name(&self, raw: &str) -> String {
        self.to_identifier(raw, NameRole::ModelName)
    }

    fn to_api_name(&self, raw: &str) -> String {
        self.to_identifier(raw, NameRole::ApiName)
    }

    /// Sanitize an operation id; an empty result aborts generation.
    fn to_operation_id(&self, raw: &str) -> Result<String, GenerateError> {
        let id = self.to_identifier(raw, NameRole::OperationId);
        if id.is_empty() {
            return Err(GenerateError::EmptyOperationId {
                raw: raw.to_string(),
            });
        }
        Ok(id)
    }
}
