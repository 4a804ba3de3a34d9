use cligen_core::model::AuthKind;
use minijinja::context;

/// Emit `addAuth(client, env)` for the spec's global auth scheme.
pub fn emit_auth(kind: AuthKind) -> Result<String, minijinja::Error> {
    let auth = match (kind.env_var(), kind.header()) {
        (Some(env_var), Some(header)) => Some(context! {
            env_var => env_var,
            header => header,
            prefix => kind.value_prefix(),
            missing_message => format!("{env_var} environment variable is not set"),
        }),
        _ => None,
    };

    super::render(
        "auth.js.j2",
        include_str!("../../templates/auth.js.j2"),
        context! { auth => auth },
    )
}
