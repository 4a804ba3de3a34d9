pub mod command;
pub mod config;
pub mod error;
pub mod example;
pub mod format;
pub mod model;
pub mod output;
pub mod parse;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    /// Whether the file should carry the executable bit on platforms that support it.
    pub executable: bool,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            executable: true,
            ..Self::new(path, content)
        }
    }
}

/// Trait for code generators that produce files from an API spec.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        spec: &model::ApiSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
