use log::warn;
use rayon::prelude::*;
use serde::Serialize;

use crate::binding::LanguageBinding;
use crate::error::GenerateError;
use crate::model::{ModelDefinition, Operation, ParameterLocation, SchemaType};

/// An operation with target names and types filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedOperation {
    /// Position in the source document.
    #[serde(skip)]
    pub index: usize,
    pub operation_id: String,
    pub original_id: String,
    pub http_method: String,
    /// Escaped for a string literal.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<PreparedParameter>,
    pub has_optional_params: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_spec: Option<String>,
    pub tags: Vec<String>,
}

/// A parameter with its target name and validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedParameter {
    pub param_name: String,
    /// Wire name, escaped for a string literal.
    pub base_name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub spec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A model definition with target names and validators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedModel {
    #[serde(skip)]
    pub index: usize,
    pub name: String,
    pub original_name: String,
    pub spec_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: Vec<PreparedProperty>,
}

/// A model property with its target name and validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedProperty {
    pub name: String,
    pub base_name: String,
    pub spec: String,
    pub required: bool,
}

/// Prepare every operation in parallel.
///
/// Output is in source order. When several operation ids are unusable, the
/// error names the first one in source order.
pub fn prepare_operations<B>(
    binding: &B,
    operations: &[Operation],
) -> Result<Vec<PreparedOperation>, GenerateError>
where
    B: LanguageBinding + ?Sized,
{
    let results: Vec<Result<PreparedOperation, GenerateError>> = operations
        .par_iter()
        .enumerate()
        .map(|(index, op)| prepare_operation(binding, index, op))
        .collect();

    let mut prepared = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    prepared.sort_by_key(|op| op.index);
    Ok(prepared)
}

/// Prepare every model definition in parallel, keeping source order.
pub fn prepare_models<B>(binding: &B, models: &[ModelDefinition]) -> Vec<PreparedModel>
where
    B: LanguageBinding + ?Sized,
{
    let mut prepared: Vec<PreparedModel> = models
        .par_iter()
        .enumerate()
        .map(|(index, model)| prepare_model(binding, index, model))
        .collect();
    prepared.sort_by_key(|model| model.index);
    prepared
}

fn prepare_operation<B>(
    binding: &B,
    index: usize,
    op: &Operation,
) -> Result<PreparedOperation, GenerateError>
where
    B: LanguageBinding + ?Sized,
{
    let operation_id = binding.to_operation_id(&op.id)?;

    let parameters: Vec<PreparedParameter> = op
        .parameters
        .iter()
        .map(|param| PreparedParameter {
            param_name: binding.to_param_name(&param.name),
            base_name: binding.escape_literal(&param.name),
            location: param.location,
            required: param.required,
            spec: binding.map_type(&param.schema_type),
            description: param.description.as_deref().map(|d| binding.escape_literal(d)),
        })
        .collect();

    let has_optional_params = parameters.iter().any(|p| !p.required);

    Ok(PreparedOperation {
        index,
        operation_id,
        original_id: op.id.clone(),
        http_method: op.http_method.clone(),
        path: binding.escape_literal(&op.path),
        summary: op.summary.as_deref().map(|s| binding.escape_literal(s)),
        description: op
            .description
            .as_deref()
            .map(|d| binding.escape_literal(d)),
        parameters,
        has_optional_params,
        return_spec: op.return_type.as_ref().map(|t| binding.map_type(t)),
        tags: op.tags.clone(),
    })
}

fn prepare_model<B>(binding: &B, index: usize, model: &ModelDefinition) -> PreparedModel
where
    B: LanguageBinding + ?Sized,
{
    let name = binding.to_model_name(&model.name);
    if name.is_empty() {
        warn!("model name {:?} sanitizes to an empty identifier", model.name);
    }

    let properties = model
        .properties
        .iter()
        .map(|prop| PreparedProperty {
            name: binding.to_var_name(&prop.name),
            base_name: binding.escape_literal(&prop.name),
            spec: binding.map_type(&prop.schema_type),
            required: prop.required,
        })
        .collect();

    PreparedModel {
        index,
        name,
        original_name: model.name.clone(),
        spec_name: binding.map_type(&SchemaType::Reference(model.name.clone())),
        description: model
            .description
            .as_deref()
            .map(|d| binding.escape_literal(d)),
        properties,
    }
}
