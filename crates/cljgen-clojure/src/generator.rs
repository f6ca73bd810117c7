use cljgen_core::config::GeneratorSettings;
use cljgen_core::model::AbstractApiModel;
use cljgen_core::transform::{self, RenderPlan};
use cljgen_core::{CodeGenerator, GeneratedFile};
use log::debug;

use crate::binding::ClojureBinding;
use crate::error::ClojureError;
use crate::render;

/// Clojure client library generator.
pub struct ClojureClientGenerator;

impl CodeGenerator for ClojureClientGenerator {
    type Config = GeneratorSettings;
    type Error = ClojureError;

    fn plan(
        &self,
        model: &AbstractApiModel,
        config: &GeneratorSettings,
    ) -> Result<RenderPlan, ClojureError> {
        Ok(transform::build_plan(&ClojureBinding, model, config)?)
    }

    fn generate(
        &self,
        model: &AbstractApiModel,
        config: &GeneratorSettings,
    ) -> Result<Vec<GeneratedFile>, ClojureError> {
        let plan = self.plan(model, config)?;
        let files = render::render_plan(&plan)?;
        debug!("rendered {} files", files.len());
        Ok(files)
    }
}
