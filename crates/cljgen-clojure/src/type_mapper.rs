use cljgen_core::binding::NameRole;
use cljgen_core::model::SchemaType;

use crate::naming::to_identifier;

/// Suffix of the named spec generated for every model.
pub const SPEC_SUFFIX: &str = "-spec";

/// Look up the predicate for a known primitive type name.
///
/// `object`, `file`, `binary` and `byte-array` carry no checkable structure and
/// map to `any?`.
pub fn primitive_spec(name: &str) -> Option<&'static str> {
    let spec = match name {
        "integer" | "long" | "short" => "int?",
        "number" | "float" | "double" => "float?",
        "array" => "list?",
        "map" => "map?",
        "boolean" => "boolean?",
        "string" => "string?",
        "char" => "char?",
        "date" | "date-time" | "DateTime" => "inst?",
        "uuid" | "UUID" => "uuid?",
        "object" | "file" | "binary" | "byte-array" | "ByteArray" => "any?",
        _ => return None,
    };
    Some(spec)
}

/// Map a `SchemaType` to a `clojure.spec` expression.
///
/// Map keys are always specced as `string?` whatever the source schema says.
/// References and unknown primitives become `<model-name>-spec`; whether that
/// model exists is not checked here.
pub fn map_type(schema_type: &SchemaType) -> String {
    match schema_type {
        SchemaType::Primitive(name) => match primitive_spec(name) {
            Some(spec) => spec.to_string(),
            None => model_spec_name(name),
        },
        SchemaType::Array(inner) => format!("(s/coll-of {})", map_type(inner)),
        SchemaType::Map(inner) => format!("(s/map-of string? {})", map_type(inner)),
        SchemaType::Reference(name) => model_spec_name(name),
    }
}

/// Spec var name for a model: `Pet` → `pet-spec`.
pub fn model_spec_name(model_name: &str) -> String {
    format!(
        "{}{SPEC_SUFFIX}",
        to_identifier(model_name, NameRole::ModelName)
    )
}
