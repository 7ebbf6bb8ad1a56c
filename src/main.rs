//! Student roster viewer - Entry Point

use clap::Parser;
use rollcall::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig,
};
use rollcall::model::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Student roster viewer - search, sort and filter a JSON roster in the terminal
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
#[command(about = "Terminal table for a JSON roster of student records")]
pub struct Args {
    /// Path to a JSON roster file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Run this search right after loading
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

impl Args {
    /// Flags that override config file and environment.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            search: self.search.clone(),
            colors: self.no_color.then_some(false),
            mouse: self.no_mouse.then_some(false),
        }
    }
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.overrides()))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    rollcall::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let input_source = rollcall::source::detect_input_source(args.file)?;

    let cli_args = rollcall::view::CliArgs::new(config.initial_search, config.colors, config.mouse);

    rollcall::view::run_with_source(input_source, cli_args)?;

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rollcall: {err}");
            ExitCode::FAILURE
        }
    }
}
