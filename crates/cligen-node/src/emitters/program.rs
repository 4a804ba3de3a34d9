use cligen_core::command::CliCommand;
use cligen_core::model::ApiSpec;
use indexmap::IndexMap;

use super::{auth, commands, dispatch, format, runtime};

/// Emit the complete generated program: runtime, auth, formatters, commands, dispatch.
pub fn emit_program(
    spec: &ApiSpec,
    program: &str,
    table: &IndexMap<String, CliCommand>,
) -> Result<String, minijinja::Error> {
    let contexts = commands::build_command_contexts(table);

    let blocks = [
        runtime::emit_runtime(spec, program)?,
        auth::emit_auth(spec.auth_kind())?,
        format::emit_format()?,
        commands::emit_commands(&contexts)?,
        dispatch::emit_dispatch(&contexts)?,
    ];

    Ok(blocks.join("\n"))
}
