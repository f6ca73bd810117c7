use cljgen_core::binding::NameRole;
use cljgen_core::naming::dashize;
use heck::ToSnakeCase;

/// Drop every character that is not an ASCII letter, digit, `_` or `-`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Sanitize and dash-case a raw name. Every role shares the same convention;
/// the result may be empty.
pub fn to_identifier(raw: &str, _role: NameRole) -> String {
    dashize(&sanitize(raw))
}

/// File name for an API namespace: `pet-store` → `pet_store`.
pub fn to_api_filename(raw: &str) -> String {
    to_identifier(raw, NameRole::ApiName).to_snake_case()
}

/// Collapse each run of characters outside `[A-Za-z_]` into one `_`.
pub fn sanitize_tag(tag: &str) -> String {
    let mut result = String::with_capacity(tag.len());
    let mut in_run = false;
    for ch in tag.chars() {
        if ch.is_ascii_alphabetic() || ch == '_' {
            result.push(ch);
            in_run = false;
        } else if !in_run {
            result.push('_');
            in_run = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_var_name(raw: &str) -> String {
        to_identifier(raw, NameRole::VarName)
    }

    const SAMPLES: &[&str] = &[
        "listPets",
        "ListPets",
        "list_pets",
        "list-pets",
        "list pets",
        "HTTPServer",
        "get$Pet#ById",
        "__init__",
        "3dModel",
        "a--b",
        "pet2Store",
        "ünïcödé",
        "",
        "   ",
        "x",
    ];

    #[test]
    fn test_conventions_converge() {
        for raw in ["listPets", "ListPets", "list_pets", "list-pets", "LIST_PETS"] {
            assert_eq!(to_var_name(raw), "list-pets", "input {raw:?}");
        }
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(sanitize("get$Pet#ById"), "getPetById");
        assert_eq!(to_var_name("get$Pet#ById"), "get-pet-by-id");
        assert_eq!(to_var_name("list pets"), "listpets");
        assert_eq!(to_var_name("ünïcödé"), "ncd");
    }

    #[test]
    fn test_only_lowercase_digits_and_hyphens() {
        for raw in SAMPLES {
            let id = to_var_name(raw);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{raw:?} produced {id:?}"
            );
        }
    }

    #[test]
    fn test_idempotent() {
        for raw in SAMPLES {
            let once = to_var_name(raw);
            assert_eq!(to_var_name(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_roles_propagate_empty() {
        assert_eq!(to_identifier("   ", NameRole::VarName), "");
        assert_eq!(to_identifier("!!!", NameRole::ModelName), "");
        assert_eq!(to_identifier("", NameRole::OperationId), "");
    }

    #[test]
    fn test_api_filename() {
        assert_eq!(to_api_filename("PetStore"), "pet_store");
        assert_eq!(to_api_filename("pet-store"), "pet_store");
        assert_eq!(to_api_filename("pets"), "pets");
    }

    #[test]
    fn test_sanitize_tag() {
        assert_eq!(sanitize_tag("pets"), "pets");
        assert_eq!(sanitize_tag("pet store"), "pet_store");
        assert_eq!(sanitize_tag("v2 / admin"), "v_admin");
        assert_eq!(sanitize_tag("snake_tag"), "snake_tag");
    }
}
