use crate::error::ParseError;
use crate::model::AbstractApiModel;

/// Load an abstract API model from YAML.
///
/// Schema types are written as single-key maps (`reference: Pet`) rather than
/// YAML tags, so enums are read through `singleton_map_recursive`.
pub fn from_yaml(input: &str) -> Result<AbstractApiModel, ParseError> {
    let deserializer = serde_yaml_ng::Deserializer::from_str(input);
    let model: AbstractApiModel =
        serde_yaml_ng::with::singleton_map_recursive::deserialize(deserializer)?;
    Ok(model)
}

/// Load an abstract API model from JSON.
pub fn from_json(input: &str) -> Result<AbstractApiModel, ParseError> {
    let model: AbstractApiModel = serde_json::from_str(input)?;
    Ok(model)
}
