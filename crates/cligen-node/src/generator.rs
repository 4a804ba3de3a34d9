use cligen_core::command;
use cligen_core::config::GeneratorConfig;
use cligen_core::model::ApiSpec;
use cligen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::error::GenerateError;

/// Node.js command-line client generator.
///
/// Produces three artifacts: the executable program, `package.json`, and `README.md`.
pub struct NodeCliGenerator;

impl NodeCliGenerator {
    /// Name of the generated program, honouring a configured override.
    pub fn program_name(spec: &ApiSpec, config: &GeneratorConfig) -> String {
        config
            .package_name
            .clone()
            .unwrap_or_else(|| emitters::program_name(&spec.name))
    }
}

impl CodeGenerator for NodeCliGenerator {
    type Config = GeneratorConfig;
    type Error = GenerateError;

    fn generate(
        &self,
        spec: &ApiSpec,
        config: &GeneratorConfig,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let program = Self::program_name(spec, config);
        let table = command::command_table(command::derive_commands(spec), config.collisions)?;
        log::debug!("generating `{}` with {} commands", program, table.len());

        let files = vec![
            GeneratedFile::executable(
                program.clone(),
                emitters::program::emit_program(spec, &program, &table)?,
            ),
            GeneratedFile::new(
                "package.json",
                emitters::manifest::emit_manifest(spec, &program, &config.runtime_version)?,
            ),
            GeneratedFile::new(
                "README.md",
                emitters::readme::emit_readme(spec, &program, &config.runtime_version, &table)?,
            ),
        ];

        Ok(files)
    }
}
