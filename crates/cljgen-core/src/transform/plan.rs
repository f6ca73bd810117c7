use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use serde_json::Value;

use super::prepare::{PreparedModel, PreparedOperation};
use crate::binding::LanguageBinding;
use crate::context::GenerationContext;
use crate::error::GenerateError;
use crate::escape::single_line;

/// Tag used for operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// One file to render: which template, where it goes, and what it sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlanEntry {
    pub template_id: String,
    pub output_path: Vec<String>,
    pub context: IndexMap<String, Value>,
}

impl RenderPlanEntry {
    /// The output path joined with `/`.
    pub fn path_string(&self) -> String {
        self.output_path.join("/")
    }
}

/// The ordered list of files a generation run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderPlan {
    pub entries: Vec<RenderPlanEntry>,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderPlanEntry> {
        self.entries.iter()
    }

    /// First entry rendered with the given template.
    pub fn find(&self, template_id: &str) -> Option<&RenderPlanEntry> {
        self.entries.iter().find(|e| e.template_id == template_id)
    }
}

/// Operations sharing one tag, rendered into a single API source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiGroup {
    /// Raw tag, token-escaped.
    pub tag_name: String,
    pub api_name: String,
    pub namespace: String,
    pub file_name: String,
    pub operations: Vec<PreparedOperation>,
}

/// Split a configured source folder into path segments.
pub fn source_segments(source_folder: &str) -> Vec<String> {
    source_folder
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Group operations by API name, in order of first appearance.
///
/// An operation listed under several tags appears in each of their groups.
/// Operations without tags, or whose tag yields no usable name, land in
/// [`DEFAULT_TAG`].
pub fn group_operations<B>(
    binding: &B,
    context: &GenerationContext,
    operations: &[PreparedOperation],
) -> Vec<ApiGroup>
where
    B: LanguageBinding + ?Sized,
{
    let mut groups: IndexMap<String, ApiGroup> = IndexMap::new();
    let default_tag = [DEFAULT_TAG.to_string()];

    for op in operations {
        let tags: &[String] = if op.tags.is_empty() {
            &default_tag
        } else {
            &op.tags
        };

        for tag in tags {
            // Tags that differ only in form share one API name, and so one file.
            let mut api_name = binding.to_api_name(&binding.sanitize_tag(tag));
            if api_name.is_empty() {
                warn!("tag {tag:?} has no usable name, grouping under {DEFAULT_TAG}");
                api_name = binding.to_api_name(DEFAULT_TAG);
            }
            let group = groups.entry(api_name).or_insert_with_key(|api_name| ApiGroup {
                tag_name: single_line(&binding.escape_token(tag)),
                namespace: format!("{}.{}", context.api_package, api_name),
                file_name: format!(
                    "{}.{}",
                    binding.to_api_filename(api_name),
                    binding.api_file_extension()
                ),
                api_name: api_name.clone(),
                operations: Vec::new(),
            });
            if group.operations.last().map(|o| o.index) != Some(op.index) {
                group.operations.push(op.clone());
            }
        }
    }

    groups.into_values().collect()
}

/// Compose the render plan: one entry per API group, then the supporting files.
pub fn assemble<B>(
    binding: &B,
    context: &GenerationContext,
    source_folder: &str,
    operations: &[PreparedOperation],
    models: &[PreparedModel],
) -> Result<RenderPlan, GenerateError>
where
    B: LanguageBinding + ?Sized,
{
    let mut base = IndexMap::new();
    extend_context(&mut base, serde_json::to_value(context)?);

    let groups = group_operations(binding, context, operations);

    let mut api_folder = source_segments(source_folder);
    api_folder.extend(binding.resolve_folder(&context.api_package));

    let mut entries = Vec::with_capacity(groups.len() + 5);

    for group in &groups {
        let mut ctx = base.clone();
        extend_context(&mut ctx, serde_json::to_value(group)?);

        let mut output_path = api_folder.clone();
        output_path.push(group.file_name.clone());

        entries.push(RenderPlanEntry {
            template_id: binding.api_template_id().to_string(),
            output_path,
            context: ctx,
        });
    }

    let apis: Vec<Value> = groups
        .iter()
        .map(|g| serde_json::json!({ "api_name": g.api_name, "namespace": g.namespace }))
        .collect();
    let models = serde_json::to_value(models)?;

    for file in binding.supporting_files(context, source_folder) {
        let mut ctx = base.clone();
        ctx.insert("models".to_string(), models.clone());
        ctx.insert("apis".to_string(), Value::Array(apis.clone()));

        let mut output_path = file.folder;
        output_path.push(file.file_name);

        entries.push(RenderPlanEntry {
            template_id: file.template_id,
            output_path,
            context: ctx,
        });
    }

    Ok(RenderPlan { entries })
}

fn extend_context(ctx: &mut IndexMap<String, Value>, value: Value) {
    if let Value::Object(map) = value {
        ctx.extend(map);
    }
}
