use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::CollisionPolicy;
use crate::error::CollisionError;
use crate::model::{ApiSpec, Parameter, Route};

/// A CLI argument derived 1:1 from a route parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArg {
    pub name: String,
    pub arg_type: String,
    pub required: bool,
    pub description: Option<String>,
    /// `--` followed by the kebab-cased parameter name.
    pub flag: String,
}

impl CliArg {
    /// The flag without its leading dashes, as the generated argument parser keys it.
    pub fn flag_key(&self) -> &str {
        self.flag.trim_start_matches("--")
    }
}

/// A CLI command derived from one route.
#[derive(Debug, Clone, PartialEq)]
pub struct CliCommand {
    /// Colon-joined command name, e.g. `users:id:get`.
    pub name: String,
    pub description: String,
    pub route: Route,
    pub args: Vec<CliArg>,
}

impl CliCommand {
    /// `METHOD /path`, used when reporting on the owning route.
    pub fn route_label(&self) -> String {
        format!("{} {}", self.route.method, self.route.path)
    }
}

/// Derive the command name for a route.
///
/// Examples:
/// - `GET /users` → `users:get`
/// - `POST /posts` → `posts:create`
/// - `GET /users/{id}` → `users:id:get`
/// - `DELETE /users/{id}/posts/{postId}` → `users:id:posts:postId:delete`
pub fn command_name(route: &Route) -> String {
    let mut parts: Vec<String> = route
        .path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.replace(['{', '}'], ""))
        .collect();
    parts.push(route.method.verb());
    parts.join(":")
}

/// Derive the CLI flag for a parameter name: `author_id` → `--author-id`.
pub fn flag_for(name: &str) -> String {
    format!("--{}", name.replace('_', "-").to_lowercase())
}

fn route_to_arg(param: &Parameter) -> CliArg {
    CliArg {
        name: param.name.clone(),
        arg_type: param.param_type.clone(),
        required: param.required,
        description: param.description.clone(),
        flag: flag_for(&param.name),
    }
}

/// Map a route to its CLI command. Argument order follows parameter order.
pub fn route_to_command(route: &Route) -> CliCommand {
    let name = command_name(route);
    let description = route.description.clone().unwrap_or_default();

    CliCommand {
        name,
        description,
        route: route.clone(),
        args: route.parameters.iter().map(route_to_arg).collect(),
    }
}

/// Derive one command per route, in route order. Duplicates are kept.
pub fn derive_commands(spec: &ApiSpec) -> Vec<CliCommand> {
    spec.routes
        .iter()
        .map(|route| {
            let command = route_to_command(route);
            log::debug!("derived `{}` from {}", command.name, command.route_label());
            command
        })
        .collect()
}

/// Find command-name and flag collisions among derived commands.
pub fn detect_collisions(commands: &[CliCommand]) -> Vec<CollisionError> {
    let mut collisions = Vec::new();
    let mut seen_names: HashMap<&str, &CliCommand> = HashMap::new();

    for command in commands {
        if let Some(first) = seen_names.insert(&command.name, command) {
            collisions.push(CollisionError::Command {
                name: command.name.clone(),
                first: first.route_label(),
                second: command.route_label(),
            });
        }

        let mut seen_flags: HashMap<&str, &str> = HashMap::new();
        for arg in &command.args {
            if let Some(first) = seen_flags.insert(&arg.flag, &arg.name) {
                collisions.push(CollisionError::Flag {
                    command: command.name.clone(),
                    flag: arg.flag.clone(),
                    first: first.to_string(),
                    second: arg.name.clone(),
                });
            }
        }
    }

    collisions
}

/// Build the dispatch table keyed by command name.
///
/// On a name collision the later command takes over the earlier slot, which
/// keeps its original position. `CollisionPolicy::Error` rejects the first
/// collision found instead.
pub fn command_table(
    commands: Vec<CliCommand>,
    policy: CollisionPolicy,
) -> Result<IndexMap<String, CliCommand>, CollisionError> {
    for collision in detect_collisions(&commands) {
        match policy {
            CollisionPolicy::Error => return Err(collision),
            CollisionPolicy::Warn => log::warn!("{collision}"),
            CollisionPolicy::Ignore => {}
        }
    }

    let mut table = IndexMap::with_capacity(commands.len());
    for command in commands {
        table.insert(command.name.clone(), command);
    }
    Ok(table)
}
