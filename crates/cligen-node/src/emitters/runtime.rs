use cligen_core::model::ApiSpec;
use minijinja::context;

/// Emit the program header: shebang, constants, error classes, and the HTTP client.
pub fn emit_runtime(spec: &ApiSpec, program: &str) -> Result<String, minijinja::Error> {
    super::render(
        "runtime.js.j2",
        include_str!("../../templates/runtime.js.j2"),
        context! {
            title => spec.name.clone(),
            program => program,
            base_url => spec.trimmed_base_url(),
        },
    )
}
