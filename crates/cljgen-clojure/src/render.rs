use cljgen_core::GeneratedFile;
use cljgen_core::transform::{RenderPlan, RenderPlanEntry};
use minijinja::{Environment, Value};

use crate::binding::{
    API_TEMPLATE, CORE_TEMPLATE, GIT_PUSH_TEMPLATE, GITIGNORE_TEMPLATE, PROJECT_TEMPLATE,
    SPECS_TEMPLATE,
};

const TEMPLATES: &[(&str, &str)] = &[
    (API_TEMPLATE, include_str!("../templates/api.clj.j2")),
    (PROJECT_TEMPLATE, include_str!("../templates/project.clj.j2")),
    (CORE_TEMPLATE, include_str!("../templates/core.clj.j2")),
    (SPECS_TEMPLATE, include_str!("../templates/specs.clj.j2")),
    (GIT_PUSH_TEMPLATE, include_str!("../templates/git_push.sh.j2")),
    (GITIGNORE_TEMPLATE, include_str!("../templates/gitignore.j2")),
];

/// Build a template environment holding every Clojure template, keyed by template id.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_test("keyword", is_keyword_safe);
    for &(id, source) in TEMPLATES {
        env.add_template(id, source)?;
    }
    Ok(env)
}

/// Whether `name` can follow a `:` as a literal keyword.
fn is_keyword_safe(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_*+!?<>=.".contains(c))
}

/// Render a single plan entry.
pub fn render_entry(
    env: &Environment<'_>,
    entry: &RenderPlanEntry,
) -> Result<GeneratedFile, minijinja::Error> {
    let tmpl = env.get_template(&entry.template_id)?;
    let content = tmpl.render(Value::from_serialize(&entry.context))?;
    Ok(GeneratedFile {
        path: entry.path_string(),
        content,
    })
}

/// Render every entry of the plan, in plan order.
pub fn render_plan(plan: &RenderPlan) -> Result<Vec<GeneratedFile>, minijinja::Error> {
    let env = environment()?;
    plan.iter().map(|entry| render_entry(&env, entry)).collect()
}
