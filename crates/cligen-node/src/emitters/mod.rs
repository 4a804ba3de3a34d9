pub mod auth;
pub mod commands;
pub mod dispatch;
pub mod format;
pub mod manifest;
pub mod program;
pub mod readme;
pub mod runtime;

use minijinja::{AutoEscape, Environment};

/// Derive the generated program name: `"Example API"` → `"example-api-cli"`.
///
/// Path separators become hyphens too, so the name is always a single file name.
pub fn program_name(spec_name: &str) -> String {
    format!(
        "{}-cli",
        spec_name.to_lowercase().replace([' ', '/', '\\'], "-")
    )
}

/// Quote a value as a JavaScript (and JSON) string literal.
fn js_string(value: String) -> String {
    serde_json::Value::String(value).to_string()
}

/// Flatten a value onto one line so it can sit inside a `//` comment.
fn line_comment(value: String) -> String {
    value
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => ' ',
            c => c,
        })
        .collect()
}

/// Make a value safe inside a Markdown table cell.
fn md_cell(value: String) -> String {
    line_comment(value).replace('|', "\\|")
}

/// Render one template with the shared environment settings.
pub(crate) fn render(
    name: &'static str,
    source: &'static str,
    ctx: minijinja::Value,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("js_string", js_string);
    env.add_filter("line_comment", line_comment);
    env.add_filter("md_cell", md_cell);
    env.add_template(name, source)?;
    let tmpl = env.get_template(name)?;
    tmpl.render(ctx)
}
