use cljgen_core::error::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClojureError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}
