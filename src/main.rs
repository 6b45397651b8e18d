//! Runedit - a small terminal text editor with undo, redo, and search.
//!
//! # Usage
//!
//! ```bash
//! runedit notes.txt
//! runedit --line-ending crlf --history-limit 500 notes.txt
//! runedit --log-file runedit.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use runedit::app::App;
use runedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use runedit::document::LineEnding;
use runedit::perf;

/// A small terminal text editor with undo, redo, and search
#[derive(Parser, Debug)]
#[command(name = "runedit", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Enable performance timing logs
    #[arg(long)]
    perf: bool,

    /// Write detailed editor events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Send tracing output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Terminator written after each line on save
    #[arg(long, value_enum, value_name = "ENDING")]
    line_ending: Option<LineEnding>,

    /// Maximum number of undo steps to keep
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>, perf_enabled: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(perf::log_filter(Level::INFO, perf_enabled))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(perf::log_filter(Level::WARN, perf_enabled))
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref(), effective.perf)?;
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("RUNEDIT_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_event_log_path(debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let mut app = App::new(cli.file)
        .with_line_ending(effective.line_ending.unwrap_or_default())
        .with_history_limit(effective.history_limit);

    app.run().context("Application error")
}
