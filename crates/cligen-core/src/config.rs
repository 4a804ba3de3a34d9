use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.cligen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CligenConfig {
    /// Directory generated artifacts are written to.
    pub output: String,
    pub generator: GeneratorConfig,
}

impl Default for CligenConfig {
    fn default() -> Self {
        Self {
            output: ".".to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Options passed to a code generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum runtime version recorded in the generated manifest.
    pub runtime_version: String,
    pub collisions: CollisionPolicy,
    /// Program name override (defaults to the kebab-cased spec name + `-cli`).
    pub package_name: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_version: ">=18".to_string(),
            collisions: CollisionPolicy::default(),
            package_name: None,
        }
    }
}

/// What to do when two routes derive the same command, or two parameters the same flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Log a warning; the later definition wins.
    #[default]
    Warn,
    /// Fail generation.
    Error,
    /// The later definition wins silently.
    Ignore,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".cligen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<CligenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: CligenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# cligen configuration
output: .               # directory the generated client is written to

generator:
  runtime_version: ">=18"   # engines.node in the generated package.json
  collisions: warn          # warn | error | ignore
  # package_name: my-api-cli  # defaults to the spec name, kebab-cased, plus -cli
"#
}
