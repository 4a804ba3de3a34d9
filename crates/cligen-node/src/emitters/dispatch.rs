use minijinja::context;

/// Emit the dispatch table, argument pre-parser, usage printer, and `main`.
pub fn emit_dispatch(commands: &[minijinja::Value]) -> Result<String, minijinja::Error> {
    super::render(
        "dispatch.js.j2",
        include_str!("../../templates/dispatch.js.j2"),
        context! { commands => commands },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        let commands = vec![
            context! { name => "users:get", fn_name => "cmdUsersGet", description => "List users" },
            context! { name => "users:id:get", fn_name => "cmdUsersIdGet", description => "" },
        ];
        let out = emit_dispatch(&commands).unwrap();
        assert!(out.starts_with(
            "const COMMANDS = {\n  \"users:get\": { run: cmdUsersGet, description: \"List users\" },\n  \"users:id:get\": { run: cmdUsersIdGet, description: \"\" },\n};\n"
        ));
        assert!(out.contains("if (command === 'help' || command === '--help' || command === '-h') {"));
        assert!(out.ends_with(
            "module.exports = { ApiClient, COMMANDS, formatOutput, main, parseArgs, substitutePath };\n"
        ));
    }
}
