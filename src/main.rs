//! mergepilot - drive in-progress git merges and rebases from the terminal

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use mergepilot::config::Config;
use mergepilot::git;
use mergepilot::merge::{ContinuationAction, build_menu};
use mergepilot::paths;
use mergepilot::text;
use std::path::{Path, PathBuf};

mod tui;

/// Continue, abort or skip an in-progress git merge or rebase
#[derive(Parser)]
#[command(name = "mergepilot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to operate on (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether a merge or rebase is in progress
    Status,
    /// Open the UI and run an action right away
    Run {
        /// Action to run
        #[arg(value_enum)]
        action: ActionArg,
    },
    /// Print the effective configuration
    Config {
        /// Print the configuration file path instead
        #[arg(long, conflicts_with = "init")]
        path: bool,

        /// Write the default configuration to the configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    Continue,
    Abort,
    Skip,
}

impl From<ActionArg> for ContinuationAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Continue => Self::Continue,
            ActionArg::Abort => Self::Abort,
            ActionArg::Skip => Self::Skip,
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Commands::Config { path: true, .. }) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(Commands::Config { init: true, .. }) => cmd_config_init(&config_path),
        Some(Commands::Config { .. }) => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Some(Commands::Status) => cmd_status(&repo_path(cli.repo)?),
        Some(Commands::Run { action }) => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(&config, &repo_path(cli.repo)?, Some(action.into()))
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(&config, &repo_path(cli.repo)?, None)
        }
    }
}

/// Log to the temp dir - tail with: tail -f /tmp/mergepilot.log
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, "mergepilot.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn repo_path(repo: Option<PathBuf>) -> Result<PathBuf> {
    match repo {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to read current directory"),
    }
}

fn run_tui(config: &Config, repo: &Path, initial: Option<ContinuationAction>) -> Result<()> {
    let git = git::Cli::open(repo, config.git.program_argv()?)?;
    tui::run(config, &git, initial)
}

fn cmd_config_init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }
    Config::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn cmd_status(repo: &Path) -> Result<()> {
    let state = git::working_tree_state(repo)?;
    println!("state: {state}");

    if !state.is_in_progress() {
        println!("{}", text::english(text::TextKey::NotMergingOrRebasing));
        return Ok(());
    }

    let menu = build_menu(state);
    let actions: Vec<&str> = menu.items.iter().map(|item| item.label()).collect();
    println!("{}: {}", text::english(menu.title), actions.join(", "));

    let conflicted: Vec<_> = git::list_files(repo)?
        .into_iter()
        .filter(|file| file.conflicted)
        .collect();
    for file in &conflicted {
        println!("  {} {}", file.marker(), file.path);
    }

    Ok(())
}
