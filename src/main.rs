//! okcheck CLI
//!
//! Entry point for the `okcheck` command-line tool.

use clap::{Args, Parser, Subcommand};
use okcheck::discover::{checkable_files, DiscoverError};
use okcheck::exclude::{exclude_override_json, ExcludeFileError};
use okcheck::layout::{check_config_path, config_dir, exclude_path, LayoutError};
use okcheck::{load, ConfigError, ResolvedConfig};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "okcheck")]
#[command(about = "Resolve static-analysis check configuration", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the check configuration
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the files a check run would consider
    Files {
        /// Project root to walk
        root: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        /// Only list files with this extension (e.g. "go")
        #[arg(long)]
        ext: Option<String>,
    },

    /// Print the override payload for an exclude file
    ExcludeJson {
        /// Path to the exclude file
        file: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the base check config (default: <config dir>/check.yml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Inline JSON override (default: rendered from <config dir>/exclude.yml)
    #[arg(long)]
    exclude_json: Option<String>,

    /// Config directory
    #[arg(long)]
    cfg_dir: Option<PathBuf>,

    /// Project wrapper script, used to locate the config directory
    #[arg(long)]
    wrapper: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    ExcludeFile(#[from] ExcludeFileError),

    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error("Error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { source, json } => run_resolve(&source, json),
        Commands::Files { root, source, ext } => run_files(root, &source, ext.as_deref()),
        Commands::ExcludeJson { file } => run_exclude_json(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(source: &SourceArgs) -> Result<ResolvedConfig, CliError> {
    let dir = config_dir(source.cfg_dir.as_deref(), source.wrapper.as_deref())?;

    let base = source
        .config
        .clone()
        .or_else(|| dir.as_deref().map(check_config_path))
        .unwrap_or_default();

    let override_json = match (&source.exclude_json, &dir) {
        (Some(json), _) => json.clone(),
        (None, Some(dir)) => exclude_override_json(&exclude_path(dir))?,
        (None, None) => String::new(),
    };

    Ok(load(&base, &override_json)?)
}

fn run_resolve(source: &SourceArgs, json: bool) -> Result<(), CliError> {
    let config = load_config(source)?;

    if json {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    println!("Checkers: {}", config.checks().len());
    for (cmd, checker) in config.checks() {
        println!("  {}", cmd);
        if !checker.args().is_empty() {
            println!("    args: {}", checker.args().join(" "));
        }
        for filter in checker.line_filters() {
            println!("    filter: {}", filter);
        }
    }

    let exclude = config.exclude();
    if exclude.is_empty() {
        println!("Exclude: none");
    } else {
        println!("Exclude:");
        if !exclude.names().is_empty() {
            println!("  names: {}", exclude.names().join(", "));
        }
        if !exclude.paths().is_empty() {
            println!("  paths: {}", exclude.paths().join(", "));
        }
    }
    Ok(())
}

fn run_files(root: PathBuf, source: &SourceArgs, ext: Option<&str>) -> Result<(), CliError> {
    let config = load_config(source)?;
    for file in checkable_files(&root, config.exclude(), ext)? {
        println!("{}", file.display());
    }
    Ok(())
}

fn run_exclude_json(file: PathBuf) -> Result<(), CliError> {
    println!("{}", exclude_override_json(&file)?);
    Ok(())
}
