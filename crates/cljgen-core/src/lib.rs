pub mod binding;
pub mod config;
pub mod context;
pub mod error;
pub mod escape;
pub mod model;
pub mod naming;
pub mod parse;
pub mod transform;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from an abstract API model.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;

    /// Compute the render plan without rendering any template.
    fn plan(
        &self,
        model: &model::AbstractApiModel,
        config: &Self::Config,
    ) -> Result<transform::RenderPlan, Self::Error>;

    fn generate(
        &self,
        model: &model::AbstractApiModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
