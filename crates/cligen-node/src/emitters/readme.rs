use cligen_core::command::CliCommand;
use cligen_core::model::ApiSpec;
use indexmap::IndexMap;
use minijinja::context;

/// Emit `README.md`: installation, authentication and per-command usage.
pub fn emit_readme(
    spec: &ApiSpec,
    program: &str,
    runtime_version: &str,
    table: &IndexMap<String, CliCommand>,
) -> Result<String, minijinja::Error> {
    let kind = spec.auth_kind();
    let auth = match (kind.env_var(), kind.header()) {
        (Some(env_var), Some(header)) => Some(context! {
            env_var => env_var,
            header => header,
        }),
        _ => None,
    };

    let commands: Vec<minijinja::Value> = table
        .values()
        .map(|command| {
            let args: Vec<minijinja::Value> = command
                .args
                .iter()
                .map(|arg| {
                    context! {
                        flag => arg.flag.clone(),
                        arg_type => arg.arg_type.clone(),
                        required => arg.required,
                        description => arg.description.clone().unwrap_or_default(),
                    }
                })
                .collect();

            context! {
                name => command.name.clone(),
                description => command.description.clone(),
                synopsis => synopsis(program, command),
                args => args,
            }
        })
        .collect();

    super::render(
        "README.md.j2",
        include_str!("../../templates/README.md.j2"),
        context! {
            title => spec.name.clone(),
            program => program,
            runtime_version => runtime_version,
            auth => auth,
            commands => commands,
        },
    )
}

/// `example-api-cli users:create --name <string> [--limit <int>]`
fn synopsis(program: &str, command: &CliCommand) -> String {
    let mut parts = vec![program.to_string(), command.name.clone()];
    for arg in &command.args {
        let usage = format!("{} <{}>", arg.flag, arg.arg_type);
        parts.push(if arg.required {
            usage
        } else {
            format!("[{usage}]")
        });
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use cligen_core::command::route_to_command;
    use cligen_core::model::{HttpMethod, Parameter, Route};

    use super::*;

    #[test]
    fn test_synopsis() {
        let command = route_to_command(&Route {
            path: "/posts".to_string(),
            method: HttpMethod::Get,
            parameters: vec![
                Parameter {
                    name: "author_id".to_string(),
                    param_type: "string".to_string(),
                    required: true,
                    description: None,
                },
                Parameter {
                    name: "limit".to_string(),
                    param_type: "int".to_string(),
                    required: false,
                    description: None,
                },
            ],
            description: None,
            auth: None,
        });
        assert_eq!(
            synopsis("blog-cli", &command),
            "blog-cli posts:get --author-id <string> [--limit <int>]"
        );
    }
}
