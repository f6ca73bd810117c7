use cljgen_core::binding::{LanguageBinding, NameRole, SupportingFile};
use cljgen_core::config::GeneratorSettings;
use cljgen_core::context::GenerationContext;
use cljgen_core::error::GenerateError;
use cljgen_core::model::{
    AbstractApiModel, ApiMetadata, ModelDefinition, Operation, Parameter, ParameterLocation,
    Property, SchemaType,
};
use cljgen_core::naming::dashize;
use cljgen_core::transform::{self, plan::source_segments};

/// Minimal binding: dash-case names, `<name>/t` types, dotted folders.
struct StubBinding;

impl LanguageBinding for StubBinding {
    fn map_type(&self, schema_type: &SchemaType) -> String {
        match schema_type {
            SchemaType::Primitive(name) => format!("{name}/t"),
            SchemaType::Array(inner) => format!("[{}]", self.map_type(inner)),
            SchemaType::Map(inner) => format!("{{{}}}", self.map_type(inner)),
            SchemaType::Reference(name) => format!("{}-ref", dashize(name)),
        }
    }

    fn to_identifier(&self, raw: &str, _role: NameRole) -> String {
        dashize(raw)
    }

    fn to_api_filename(&self, name: &str) -> String {
        dashize(name).replace('-', "_")
    }

    fn sanitize_tag(&self, tag: &str) -> String {
        tag.to_string()
    }

    fn resolve_folder(&self, namespace: &str) -> Vec<String> {
        namespace.split('.').map(String::from).collect()
    }

    fn escape_token(&self, input: &str) -> String {
        input.replace('"', "")
    }

    fn api_template_id(&self) -> &str {
        "api"
    }

    fn api_file_extension(&self) -> &str {
        "txt"
    }

    fn supporting_files(
        &self,
        context: &GenerationContext,
        source_folder: &str,
    ) -> Vec<SupportingFile> {
        let mut folder = source_segments(source_folder);
        folder.extend(self.resolve_folder(&context.base_namespace));
        vec![
            SupportingFile::new("readme", Vec::new(), "README"),
            SupportingFile::new("core", folder, "core.txt"),
        ]
    }
}

fn operation(id: &str, method: &str, tags: &[&str]) -> Operation {
    Operation {
        id: id.to_string(),
        http_method: method.to_string(),
        path: format!("/{id}"),
        summary: None,
        description: None,
        parameters: Vec::new(),
        return_type: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn sample_model() -> AbstractApiModel {
    let mut list = operation("listPets", "GET", &["pets"]);
    list.parameters.push(Parameter {
        name: "limit".to_string(),
        location: ParameterLocation::Query,
        required: false,
        schema_type: SchemaType::primitive("integer"),
        description: Some("How many \"pets\"".to_string()),
    });
    list.return_type = Some(SchemaType::array(SchemaType::reference("Pet")));

    AbstractApiModel {
        metadata: ApiMetadata {
            title: Some("Pet Store".to_string()),
            ..Default::default()
        },
        operations: vec![
            list,
            operation("getInventory", "GET", &["store"]),
            operation("addPet", "POST", &["pets"]),
            operation("ping", "HEAD", &[]),
        ],
        models: vec![ModelDefinition {
            name: "Pet".to_string(),
            description: None,
            properties: vec![Property {
                name: "petId".to_string(),
                schema_type: SchemaType::primitive("long"),
                required: true,
            }],
        }],
    }
}

#[test]
fn plan_orders_apis_then_supporting_files() {
    let plan = transform::build_plan(&StubBinding, &sample_model(), &GeneratorSettings::default())
        .unwrap();

    let paths: Vec<String> = plan.iter().map(|e| e.path_string()).collect();
    assert_eq!(
        paths,
        vec![
            "src/pet-store/api/pets.txt",
            "src/pet-store/api/store.txt",
            "src/pet-store/api/default.txt",
            "README",
            "src/pet-store/core.txt",
        ]
    );

    let templates: Vec<&str> = plan.iter().map(|e| e.template_id.as_str()).collect();
    assert_eq!(templates, vec!["api", "api", "api", "readme", "core"]);
}

#[test]
fn api_entry_context_carries_group_and_project() {
    let plan = transform::build_plan(&StubBinding, &sample_model(), &GeneratorSettings::default())
        .unwrap();
    let pets = &plan.entries[0];

    assert_eq!(pets.context["project_name"], "pet-store");
    assert_eq!(pets.context["api_package"], "pet-store.api");
    assert_eq!(pets.context["namespace"], "pet-store.api.pets");
    assert_eq!(pets.context["api_name"], "pets");

    let ops = pets.context["operations"].as_array().unwrap();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0]["operation_id"], "list-pets");
    assert_eq!(ops[0]["original_id"], "listPets");
    assert_eq!(ops[0]["http_method"], "get");
    assert_eq!(ops[0]["return_spec"], "[pet-ref]");
    assert_eq!(ops[0]["has_optional_params"], true);
    assert_eq!(ops[0]["parameters"][0]["location"], "query");
    assert_eq!(ops[0]["parameters"][0]["spec"], "integer/t");
    assert_eq!(ops[0]["parameters"][0]["description"], r#"How many \"pets\""#);
    assert_eq!(ops[1]["operation_id"], "add-pet");
    assert_eq!(ops[1]["http_method"], "post");
}

#[test]
fn supporting_entries_see_models_and_apis() {
    let plan = transform::build_plan(&StubBinding, &sample_model(), &GeneratorSettings::default())
        .unwrap();
    let core = plan.find("core").unwrap();

    let models = core.context["models"].as_array().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0]["name"], "pet");
    assert_eq!(models[0]["spec_name"], "pet-ref");
    assert_eq!(models[0]["properties"][0]["name"], "pet-id");
    assert_eq!(models[0]["properties"][0]["spec"], "long/t");

    let apis = core.context["apis"].as_array().unwrap();
    let names: Vec<&str> = apis.iter().map(|a| a["api_name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["pets", "store", "default"]);
}

#[test]
fn absent_metadata_is_omitted_from_context() {
    let plan = transform::build_plan(&StubBinding, &sample_model(), &GeneratorSettings::default())
        .unwrap();
    let readme = plan.find("readme").unwrap();
    assert!(!readme.context.contains_key("project_url"));
    assert!(!readme.context.contains_key("license_name"));
    assert!(!readme.context.contains_key("license_url"));
}

#[test]
fn empty_operation_id_aborts_generation() {
    let mut model = sample_model();
    model.operations.push(operation("   ", "GET", &["pets"]));
    model.operations.push(operation("", "GET", &["pets"]));

    let err = transform::build_plan(&StubBinding, &model, &GeneratorSettings::default())
        .unwrap_err();
    match err {
        GenerateError::EmptyOperationId { raw } => assert_eq!(raw, "   "),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut model = sample_model();
    for i in 0..200 {
        let tag = format!("tag{}", i % 7);
        model
            .operations
            .push(operation(&format!("op{i}"), "PUT", &[tag.as_str()]));
    }
    let settings = GeneratorSettings::default();

    let first = transform::build_plan(&StubBinding, &model, &settings).unwrap();
    for _ in 0..5 {
        let again = transform::build_plan(&StubBinding, &model, &settings).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&again).unwrap()
        );
    }
}

#[test]
fn operation_under_two_tags_is_in_both_groups() {
    let model = AbstractApiModel {
        operations: vec![operation("feed", "POST", &["pets", "store"])],
        ..Default::default()
    };
    let plan = transform::build_plan(&StubBinding, &model, &GeneratorSettings::default())
        .unwrap();
    assert_eq!(plan.entries[0].context["namespace"], "swagger-clj-client.api.pets");
    assert_eq!(plan.entries[1].context["namespace"], "swagger-clj-client.api.store");
    assert_eq!(plan.len(), 4);
}

#[test]
fn tags_with_the_same_api_name_share_one_group() {
    let model = AbstractApiModel {
        operations: vec![
            operation("login", "GET", &["UserAdmin"]),
            operation("logout", "GET", &["user admin"]),
            operation("ping", "GET", &["health"]),
        ],
        ..Default::default()
    };
    let plan = transform::build_plan(&StubBinding, &model, &GeneratorSettings::default())
        .unwrap();

    let paths: Vec<String> = plan.iter().map(|e| e.path_string()).collect();
    let mut unique = paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), paths.len(), "duplicate output paths: {paths:?}");

    let admin = &plan.entries[0];
    assert_eq!(admin.path_string(), "src/swagger-clj-client/api/user_admin.txt");
    assert_eq!(admin.context["tag_name"], "UserAdmin");
    let ids: Vec<&str> = admin.context["operations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["operation_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["login", "logout"]);
    assert_eq!(plan.entries[1].context["api_name"], "health");
}

#[test]
fn raw_names_are_escaped_in_context() {
    let mut op = operation("fetch", "GET", &["t\n(System/exit 0)"]);
    op.path = r#"/x"y"#.to_string();
    op.parameters.push(Parameter {
        name: r#"k"ey"#.to_string(),
        location: ParameterLocation::Query,
        required: true,
        schema_type: SchemaType::primitive("string"),
        description: None,
    });
    let model = AbstractApiModel {
        operations: vec![op],
        models: vec![ModelDefinition {
            name: "Pet".to_string(),
            description: None,
            properties: vec![Property {
                name: r#"na"me"#.to_string(),
                schema_type: SchemaType::primitive("string"),
                required: false,
            }],
        }],
        ..Default::default()
    };
    let plan = transform::build_plan(&StubBinding, &model, &GeneratorSettings::default())
        .unwrap();

    let api = &plan.entries[0];
    assert_eq!(api.context["tag_name"], "t (System/exit 0)");
    let op = &api.context["operations"][0];
    assert_eq!(op["path"], r#"/x\"y"#);
    assert_eq!(op["parameters"][0]["base_name"], r#"k\"ey"#);

    let core = plan.find("core").unwrap();
    assert_eq!(core.context["models"][0]["properties"][0]["base_name"], r#"na\"me"#);
}
