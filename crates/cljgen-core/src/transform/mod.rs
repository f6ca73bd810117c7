pub mod metadata;
pub mod plan;
pub mod post_process;
pub mod prepare;

pub use plan::{ApiGroup, RenderPlan, RenderPlanEntry};

use log::debug;

use crate::binding::LanguageBinding;
use crate::config::GeneratorSettings;
use crate::error::GenerateError;
use crate::model::AbstractApiModel;

/// Run the whole pipeline and produce the render plan.
///
/// Aborts without a partial plan if any operation id is unusable.
pub fn build_plan<B>(
    binding: &B,
    model: &AbstractApiModel,
    settings: &GeneratorSettings,
) -> Result<RenderPlan, GenerateError>
where
    B: LanguageBinding + ?Sized,
{
    // Phase 1: Resolve the generation context; read-only from here on
    let context = metadata::resolve(&model.metadata, &settings.options);
    debug!(
        "resolved project {} {} (namespace {})",
        context.project_name, context.project_version, context.base_namespace
    );

    // Phase 2: Name and type every operation and model
    let mut operations = prepare::prepare_operations(binding, &model.operations)?;
    let models = prepare::prepare_models(binding, &model.models);
    debug!(
        "prepared {} operations and {} models",
        operations.len(),
        models.len()
    );

    // Phase 3: Normalize the operation collection
    post_process::lowercase_http_methods(&mut operations);

    // Phase 4: Assemble the ordered plan
    let plan = plan::assemble(
        binding,
        &context,
        &settings.source_folder,
        &operations,
        &models,
    )?;
    debug!("render plan has {} entries", plan.len());
    Ok(plan)
}
