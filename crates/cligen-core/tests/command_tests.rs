use cligen_core::command::{self, CliCommand};
use cligen_core::config::CollisionPolicy;
use cligen_core::format::{OutputFormat, format_output};
use cligen_core::parse;
use serde_json::json;

const EXAMPLE: &str = include_str!("fixtures/example-api.json");
const LOWERCASE_METHODS: &str = include_str!("fixtures/lowercase-methods.json");

fn names(commands: &[CliCommand]) -> Vec<&str> {
    commands.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn derive_example_commands() {
    let spec = parse::from_json(EXAMPLE).unwrap();
    let commands = command::derive_commands(&spec);

    insta::assert_debug_snapshot!(names(&commands), @r#"
    [
        "users:get",
        "users:create",
        "users:id:get",
        "posts:get",
        "posts:create",
    ]
    "#);
}

#[test]
fn derive_flags_from_parameters() {
    let spec = parse::from_json(EXAMPLE).unwrap();
    let commands = command::derive_commands(&spec);
    let create_post = &commands[4];

    let flags: Vec<&str> = create_post.args.iter().map(|a| a.flag.as_str()).collect();
    assert_eq!(flags, ["--title", "--body", "--author-id"]);
    assert_eq!(create_post.description, "Create a new post");
    assert_eq!(create_post.route.path, "/posts");
}

#[test]
fn derive_normalizes_method_before_naming() {
    let spec = parse::from_json(LOWERCASE_METHODS).unwrap();
    let commands = command::derive_commands(&spec);
    assert_eq!(names(&commands), ["services:get", "services:service_id:head"]);
    assert_eq!(commands[1].args[0].flag, "--service-id");
    assert_eq!(commands[0].description, "");
}

#[test]
fn example_has_no_collisions() {
    let spec = parse::from_json(EXAMPLE).unwrap();
    let commands = command::derive_commands(&spec);
    assert!(command::detect_collisions(&commands).is_empty());

    let table = command::command_table(commands, CollisionPolicy::Error).unwrap();
    assert_eq!(table.len(), 5);
}

#[test]
fn command_listing_renders_as_table() {
    let spec = parse::from_json(LOWERCASE_METHODS).unwrap();
    let rows: Vec<serde_json::Value> = command::derive_commands(&spec)
        .iter()
        .map(|c| json!({ "command": c.name, "method": c.route.method.as_str() }))
        .collect();

    let out = format_output(&serde_json::Value::Array(rows), OutputFormat::Table);
    assert_eq!(
        out,
        "command\tmethod\n--------------\nservices:get\tGET\nservices:service_id:head\tHEAD\n"
    );
}
