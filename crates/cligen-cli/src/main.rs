use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cligen_core::config::{self, CONFIG_FILE_NAME, CligenConfig};
use cligen_core::format::{OutputFormat, format_output};
use cligen_core::model::ApiSpec;
use cligen_core::output::write_files;
use cligen_core::{CodeGenerator, command, example, parse};
use cligen_node::NodeCliGenerator;

#[derive(Parser)]
#[command(
    name = "cligen",
    about = "Generate a command-line client from an API route spec",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Generate from the built-in example spec
    #[arg(long, conflicts_with = "input")]
    example: bool,

    /// Path to the API spec file (JSON)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    input: Option<Option<PathBuf>>,

    /// Directory to write the generated client to [default: from .cligen.yaml, else .]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the commands a spec would generate
    Inspect {
        /// Path to the API spec file (JSON)
        #[arg(short, long, required_unless_present = "example")]
        input: Option<PathBuf>,

        /// Inspect the built-in example spec
        #[arg(long, conflicts_with = "input")]
        example: bool,

        /// Output format
        #[arg(long, default_value = "table")]
        format: InspectFormat,
    },

    /// Initialize a new cligen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InspectFormat {
    Json,
    Table,
    Csv,
}

impl From<InspectFormat> for OutputFormat {
    fn from(format: InspectFormat) -> Self {
        match format {
            InspectFormat::Json => OutputFormat::Json,
            InspectFormat::Table => OutputFormat::Table,
            InspectFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Where the API spec comes from.
enum SpecSource {
    Example,
    File(PathBuf),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Nothing recognizable: fall back to the same usage output as a bare invocation.
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand
            ) =>
        {
            if let Some(line) = err.render().to_string().lines().next() {
                eprintln!("{line}");
            }
            return print_usage();
        }
        Err(err) => err.exit(),
    };

    match cli.command {
        Some(Commands::Inspect {
            input,
            example,
            format,
        }) => {
            let source = match input {
                Some(path) if !example => SpecSource::File(path),
                _ => SpecSource::Example,
            };
            cmd_inspect(source, format)
        }

        Some(Commands::Init { force }) => cmd_init(force),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cligen", &mut std::io::stdout());
            Ok(())
        }

        None => match (cli.example, cli.input) {
            (true, _) => cmd_generate(SpecSource::Example, cli.output),
            (false, Some(Some(path))) => cmd_generate(SpecSource::File(path), cli.output),
            (false, Some(None)) => anyhow::bail!("--input requires a file path"),
            (false, None) => print_usage(),
        },
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<CligenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_spec(source: SpecSource) -> Result<ApiSpec> {
    match source {
        SpecSource::Example => Ok(example::example_spec()?),
        SpecSource::File(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse::from_json(&content).with_context(|| format!("invalid spec {}", path.display()))
        }
    }
}

fn print_usage() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    println!("Spec format (JSON):");
    println!("{}", example::SCHEMA_SAMPLE);
    Ok(())
}

fn cmd_generate(source: SpecSource, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec = load_spec(source)?;
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    eprintln!("Generating {} → {}", spec.name, output_dir.display());
    let files = NodeCliGenerator.generate(&spec, &cfg.generator)?;
    let written = write_files(&output_dir, &files)?;
    for path in &written {
        eprintln!("  wrote {}", path.display());
    }

    let program = NodeCliGenerator::program_name(&spec, &cfg.generator);
    eprintln!(
        "Generated {} files. Try `./{} help` in {}",
        written.len(),
        program,
        output_dir.display()
    );
    Ok(())
}

fn cmd_inspect(source: SpecSource, format: InspectFormat) -> Result<()> {
    let spec = load_spec(source)?;
    let commands = command::derive_commands(&spec);

    for collision in command::detect_collisions(&commands) {
        eprintln!("  warning: {collision}");
    }

    let rows: Vec<serde_json::Value> = commands
        .iter()
        .map(|c| {
            let flags: Vec<&str> = c.args.iter().map(|a| a.flag.as_str()).collect();
            serde_json::json!({
                "command": c.name,
                "method": c.route.method.as_str(),
                "path": c.route.path,
                "flags": flags.join(" "),
                "description": c.description,
            })
        })
        .collect();

    print!(
        "{}",
        format_output(&serde_json::Value::Array(rows), format.into())
    );
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
