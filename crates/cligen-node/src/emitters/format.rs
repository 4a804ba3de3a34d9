use cligen_core::format::OutputFormat;
use minijinja::context;

/// Emit `formatOutput(data, format)` and its json/table/csv helpers.
pub fn emit_format() -> Result<String, minijinja::Error> {
    let formats: Vec<&str> = OutputFormat::ALL.iter().map(OutputFormat::as_str).collect();
    super::render(
        "format.js.j2",
        include_str!("../../templates/format.js.j2"),
        context! { formats => formats },
    )
}
