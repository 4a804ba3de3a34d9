use crate::error::ParseError;
use crate::model::ApiSpec;
use crate::parse;

/// The built-in sample spec used by `cligen --example`.
pub const EXAMPLE_SPEC: &str = include_str!("../tests/fixtures/example-api.json");

/// Abbreviated input schema shown when the generator is run without arguments.
pub const SCHEMA_SAMPLE: &str = r#"{
  "name": "My API",
  "baseUrl": "https://api.example.com",
  "auth": { "type": "bearer" },
  "routes": [
    {
      "path": "/users/{id}",
      "method": "GET",
      "description": "Get a user by ID",
      "parameters": [
        { "name": "id", "type": "string", "required": true, "description": "User ID" }
      ]
    }
  ]
}"#;

/// Parse the built-in sample spec.
pub fn example_spec() -> Result<ApiSpec, ParseError> {
    parse::from_json(EXAMPLE_SPEC)
}
