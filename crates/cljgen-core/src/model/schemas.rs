use serde::{Deserialize, Serialize};

/// The shape of a value in the source API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    Primitive(String),
    Array(Box<SchemaType>),
    Map(Box<SchemaType>), // keys are always strings
    Reference(String),
}

impl SchemaType {
    pub fn primitive(name: impl Into<String>) -> Self {
        SchemaType::Primitive(name.into())
    }

    pub fn array(inner: SchemaType) -> Self {
        SchemaType::Array(Box::new(inner))
    }

    pub fn map(inner: SchemaType) -> Self {
        SchemaType::Map(Box::new(inner))
    }

    pub fn reference(model_name: impl Into<String>) -> Self {
        SchemaType::Reference(model_name.into())
    }
}

/// A named model definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A property on a model definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub schema_type: SchemaType,
    #[serde(default)]
    pub required: bool,
}
