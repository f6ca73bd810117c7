use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::info;

use cljgen_clojure::ClojureClientGenerator;
use cljgen_core::config::{self, CONFIG_FILE_NAME, CljgenConfig, GeneratorSettings};
use cljgen_core::model::AbstractApiModel;
use cljgen_core::parse;
use cljgen_core::{CodeGenerator, GeneratedFile};

#[derive(Parser)]
#[command(name = "cljgen", about = "Clojure client library generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Clojure client from an API model
    Generate {
        /// Path to the API model (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override a generation option, e.g. `-D projectName=pets`
        #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
        defines: Vec<String>,
    },

    /// Print the render plan without rendering templates
    Plan {
        /// Path to the API model
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: PlanFormat,

        /// Override a generation option
        #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
        defines: Vec<String>,
    },

    /// Validate an API model
    Validate {
        /// Path to the API model
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new cljgen configuration
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

#[derive(Clone, ValueEnum)]
enum PlanFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            defines,
        } => cmd_generate(input, output, &defines),

        Commands::Plan {
            input,
            format,
            defines,
        } => cmd_plan(input, format, &defines),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "cljgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<CljgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_model(path: &Path) -> Result<AbstractApiModel> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let model = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("failed to load API model {}", path.display()))?;
    Ok(model)
}

/// Generator settings from the config file at `config_path`, with `-D`
/// overrides applied.
fn load_settings(config_path: &Path, defines: &[String]) -> Result<GeneratorSettings> {
    let mut settings = config::load_config(config_path)
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default()
        .generator;
    apply_defines(&mut settings, defines)?;
    Ok(settings)
}

/// Layer `key=value` command line overrides on top of the configured settings.
fn apply_defines(settings: &mut GeneratorSettings, defines: &[String]) -> Result<()> {
    for pair in defines {
        settings.options.apply_pair(pair)?;
    }
    Ok(())
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, defines: &[String]) -> Result<()> {
    let mut cfg = try_load_config()?.unwrap_or_default();
    apply_defines(&mut cfg.generator, defines)?;

    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let model = load_model(&input)?;

    eprintln!("Generating {} → {}", input.display(), output_dir.display());
    let files = ClojureClientGenerator.generate(&model, &cfg.generator)?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_plan(input: PathBuf, format: PlanFormat, defines: &[String]) -> Result<()> {
    let settings = load_settings(Path::new(CONFIG_FILE_NAME), defines)?;
    let model = load_model(&input)?;
    let plan = ClojureClientGenerator.plan(&model, &settings)?;

    match format {
        PlanFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&plan)?;
            print!("{}", yaml);
        }
        PlanFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let settings = load_settings(Path::new(CONFIG_FILE_NAME), &[])?;
    let model = load_model(&input)?;

    eprintln!(
        "Valid API model: {}",
        model.metadata.title.as_deref().unwrap_or("(untitled)")
    );
    eprintln!("  Operations: {}", model.operations.len());
    eprintln!("  Models: {}", model.models.len());

    // Also validate that every operation survives naming
    let plan = ClojureClientGenerator.plan(&model, &settings)?;
    info!("planned {} files", plan.len());
    eprintln!("  Planned files: {}", plan.len());

    eprintln!("Validation successful.");
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
