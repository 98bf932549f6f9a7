//! # Scoop Terminal Application Entry Point
//!
//! `scoop` is an ice-cream vendor's sales tracker: a product catalog with
//! a running sold-counter per product, persisted to a single JSON
//! snapshot file.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           scoop (CLI)                                   │
//! │                                                                         │
//! │  main.rs ────► logging, data path, argument dispatch                   │
//! │                                                                         │
//! │  commands/ ──► add, list, show, sell, unsell, delete, theme            │
//! │                                                                         │
//! │  error.rs ───► AppError (code + message) shown as `error: …`           │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  scoop-store :: SalesStore                       │  │
//! │  │        sales-tracker.json (single snapshot document)             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Resolve the snapshot file path (env override or data directory)
//! 3. Open the store (load-or-default)
//! 4. Dispatch the subcommand
//! 5. Exit non-zero on error

mod commands;
mod error;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use error::AppError;
use scoop_store::SalesStore;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    if matches!(command, "--help" | "-h" | "help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = open_store().and_then(|store| dispatch(&store, command, &args[1..]));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Routes a subcommand to its handler.
fn dispatch(store: &SalesStore, command: &str, rest: &[String]) -> Result<(), AppError> {
    match command {
        "add" => commands::product::add(store, rest),
        "list" => commands::product::list(store),
        "show" => commands::product::show(store, rest),
        "delete" => commands::product::delete(store, rest),
        "sell" => commands::sales::sell(store, rest),
        "unsell" => commands::sales::unsell(store, rest),
        "theme" => commands::config::toggle_theme(store),
        other => Err(AppError::usage(format!(
            "unknown command '{other}' (see scoop --help)"
        ))),
    }
}

/// Opens the store at the resolved snapshot path.
fn open_store() -> Result<SalesStore, AppError> {
    let path = data_file_path()?;
    SalesStore::open(path).map_err(AppError::from)
}

/// Determines the snapshot file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.oshivema.scoop/sales-tracker.json`
/// - **Windows**: `%APPDATA%\oshivema\scoop\data\sales-tracker.json`
/// - **Linux**: `~/.local/share/scoop/sales-tracker.json`
///
/// ## Development Override
/// Set `SCOOP_DATA_FILE` to use a custom path.
fn data_file_path() -> Result<PathBuf, AppError> {
    // Check for override
    if let Ok(path) = env::var("SCOOP_DATA_FILE") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "oshivema", "scoop")
        .ok_or_else(|| AppError::internal("Could not determine a data directory"))?;

    Ok(proj_dirs.data_dir().join("sales-tracker.json"))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=scoop=trace` - Show trace for scoop crates only
/// - Default: WARN level, so command output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Scoop - ice cream sales tracker");
    println!();
    println!("Usage: scoop <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  add <name> <selling-price> [--cost <price>] [--sold <qty>]");
    println!("                         Add a product to the catalog");
    println!("  list                   List products with totals");
    println!("  show <id>              Show one product with profit figures");
    println!("  sell <id> [qty]        Record sales (default 1)");
    println!("  unsell <id> [qty]      Remove recorded sales (default 1)");
    println!("  delete <id> [--yes]    Delete a product (asks for confirmation)");
    println!("  theme                  Toggle the light/dark theme");
    println!();
    println!("Environment:");
    println!("  SCOOP_DATA_FILE        Override the snapshot file location");
    println!("  RUST_LOG               Log filter (e.g. debug, scoop=trace)");
}
