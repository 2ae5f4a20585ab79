//! CLI entry point for the resource indexer.
//!
//! Provides commands for scanning `res/` directories and querying the
//! resulting resource table.

use anyhow::{Context, Result, bail};
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use resdex::{
    FsFile, ProjectResources, ResourceScanner, ResourceType, Settings, indexing::FileWalker,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Android resource indexer
#[derive(Parser)]
#[command(
    name = "resdex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Android resource indexer",
    long_about = "Scan res/ directories and query the resources they declare.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .resdex directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .resdex/settings.toml")]
    Config,

    /// Scan a res/ directory
    #[command(about = "Register every resource declared under a res/ directory")]
    Scan {
        /// Path to the res/ directory
        res_dir: PathBuf,

        /// Mark the scanned resources as platform resources
        #[arg(long)]
        framework: bool,

        /// Number of threads to use (overrides config)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Count the files a scan would look at without parsing them
        #[arg(long)]
        dry_run: bool,

        /// Output the table as JSON
        #[arg(long)]
        json: bool,

        /// Write the table as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up one resource
    #[command(
        about = "Show every value of a resource across configurations",
        after_help = "Examples:\n  resdex get string app_name --res app/src/main/res\n  resdex get color primary --res res --json"
    )]
    Get {
        /// Resource type (string, color, layout, ...)
        resource_type: String,

        /// Resource name
        name: String,

        /// Path to the res/ directory
        #[arg(long)]
        res: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List what a single resource file declares
    #[command(about = "Show the resource types and names declared by one file")]
    Types {
        /// Path to a file inside a resource folder
        file: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct ValueOutput {
    configuration: String,
    reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

fn init_logging(settings: &Settings) {
    let default_level = if settings.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    if let Some(config_path) = &cli.config {
        return Settings::load_from(config_path).map_err(|e| {
            anyhow::anyhow!(
                "Configuration error loading from {}: {e}",
                config_path.display()
            )
        });
    }

    if !matches!(cli.command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            eprintln!("Warning: {warning}");
            eprintln!("Using default configuration for now.");
        }
    }

    Ok(Settings::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    }))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli)?;
    init_logging(&settings);

    match cli.command {
        Commands::Init { force } => {
            let path = Settings::init_config_file(force)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
        }

        Commands::Config => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{}", toml::to_string_pretty(&settings)?);
        }

        Commands::Scan {
            res_dir,
            framework,
            threads,
            dry_run,
            json,
            output,
        } => {
            if let Some(threads) = threads {
                settings.scan.parallel_threads = threads;
            }
            let settings = Arc::new(settings);

            if dry_run {
                let walker = FileWalker::new(settings);
                println!(
                    "Would scan {} files in {}",
                    walker.count_files(&res_dir),
                    res_dir.display()
                );
                return Ok(());
            }

            let scanner = ResourceScanner::new(settings);
            let mut table = ProjectResources::new();
            if !framework {
                if let Some(stats) = scanner.refresh_framework(&mut table)? {
                    debug!("Framework resources: {} items", stats.items_total);
                }
            }
            let stats = scanner.refresh(&mut table, &res_dir, framework)?;

            if let Some(output) = &output {
                table.snapshot().write_json(output)?;
                eprintln!("Wrote {} items to {}", table.item_count(), output.display());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&table.snapshot())?);
            } else {
                stats.display();
            }
        }

        Commands::Get {
            resource_type,
            name,
            res,
            json,
        } => {
            let resource_type: ResourceType = resource_type
                .parse()
                .map_err(|e| anyhow::anyhow!("{e}: {resource_type}"))?;

            let scanner = ResourceScanner::new(Arc::new(settings));
            let mut table = ProjectResources::new();
            scanner.refresh_framework(&mut table)?;
            scanner.refresh(&mut table, &res, false)?;

            let values: Vec<ValueOutput> = table
                .values(resource_type, &name)
                .into_iter()
                .map(|(configuration, value)| ValueOutput {
                    configuration: configuration.to_string(),
                    reference: value.reference(),
                    value: value.value,
                })
                .collect();

            if values.is_empty() {
                bail!("No {resource_type} resource named '{name}'");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                for value in &values {
                    let configuration = if value.configuration.is_empty() {
                        "default"
                    } else {
                        value.configuration.as_str()
                    };
                    println!(
                        "{:<20} {} = {}",
                        configuration,
                        value.reference,
                        value.value.as_deref().unwrap_or("<none>")
                    );
                }
            }
        }

        Commands::Types { file } => {
            let folder_path = file
                .parent()
                .with_context(|| format!("{} is not inside a resource folder", file.display()))?;

            let mut table = ProjectResources::new();
            let folder_id = table.add_folder(folder_path, false)?;
            let file_id = table.add_file(folder_id, Box::new(FsFile::new(&file)))?;
            let resource_file = table
                .file(file_id)
                .with_context(|| format!("{file_id} vanished from the table"))?;

            println!("{resource_file}");
            for resource_type in resource_file.resource_types() {
                let names = resource_file.kind().resource_names(resource_type);
                println!("  {} ({})", resource_type.display_name(), names.len());
                for name in names {
                    println!("    {name}");
                }
            }
        }
    }

    Ok(())
}
