pub mod binding;
pub mod error;
pub mod escape;
pub mod generator;
pub mod namespace;
pub mod naming;
pub mod render;
pub mod type_mapper;

pub use binding::ClojureBinding;
pub use error::ClojureError;
pub use generator::ClojureClientGenerator;
