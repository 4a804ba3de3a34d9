use std::collections::HashSet;

use cligen_core::command::{CliArg, CliCommand};
use heck::ToPascalCase;
use indexmap::IndexMap;
use minijinja::context;

/// Build one template context per dispatchable command, in dispatch order.
///
/// Function names are derived from command names and de-duplicated, since
/// distinct command names can normalize to the same identifier.
pub fn build_command_contexts(commands: &IndexMap<String, CliCommand>) -> Vec<minijinja::Value> {
    let mut seen_fns = HashSet::new();

    commands
        .values()
        .map(|command| {
            let base = format!("cmd{}", command.name.to_pascal_case());
            let mut fn_name = base.clone();
            let mut n = 2;
            while !seen_fns.insert(fn_name.clone()) {
                fn_name = format!("{base}{n}");
                n += 1;
            }

            let summary = if command.description.is_empty() {
                command.name.clone()
            } else {
                format!("{}: {}", command.name, command.description)
            };

            context! {
                name => command.name.clone(),
                fn_name => fn_name,
                summary => summary,
                description => command.description.clone(),
                method => command.route.method.as_str(),
                path => command.route.path.clone(),
                args => command.args.iter().map(build_arg_context).collect::<Vec<_>>(),
            }
        })
        .collect()
}

fn build_arg_context(arg: &CliArg) -> minijinja::Value {
    context! {
        key => arg.flag_key(),
        flag => arg.flag.clone(),
        name => arg.name.clone(),
        arg_type => arg.arg_type.clone(),
        required => arg.required,
        description => arg.description.clone().unwrap_or_default(),
    }
}

/// Emit the shared per-command helpers and one async function per command.
pub fn emit_commands(commands: &[minijinja::Value]) -> Result<String, minijinja::Error> {
    super::render(
        "commands.js.j2",
        include_str!("../../templates/commands.js.j2"),
        context! { commands => commands },
    )
}
