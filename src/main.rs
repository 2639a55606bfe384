//! SkewNoNo - fab and tool selector for the measurement dashboard
//!
//! This is the binary entry point. Selection logic lives in skewnono-app,
//! rendering in skewnono-tui.

mod headless;

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser, Subcommand};
use skewnono_app::config::{self, Settings};
use skewnono_app::{AppState, FileStore, KeyValueStore, MemoryStore, SelectionStore};
use skewnono_core::{logging, Result};
use tracing::{info, warn};

/// SkewNoNo - pick a fab and a metrology tool
#[derive(Parser, Debug)]
#[command(name = "skewnono", version)]
#[command(about = "Fab and tool selector for the SkewNoNo dashboard", long_about = None)]
struct Args {
    /// Directory holding the persisted selection
    #[arg(long, global = true, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep the selection in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Initial route for the TUI ("/" or "/main")
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current selection as JSON
    Show,

    /// Set the fab and/or tool
    #[command(group(ArgGroup::new("field").required(true).multiple(true).args(["fab", "tool"])))]
    Select {
        #[arg(long)]
        fab: Option<String>,

        #[arg(long)]
        tool: Option<String>,
    },

    /// Clear the selection and its persisted record
    Clear,
}

/// Exit code for rejected input or unusable stored data
const EXIT_RECOVERABLE: i32 = 2;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The TUI owns the terminal, so logs only go to file
    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(args) {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            warn!("Command failed: {}", e);
            eprintln!("error: {e}");
            std::process::exit(EXIT_RECOVERABLE);
        }
        Err(e) => Err(e.into()),
    }
}

fn run(args: Args) -> Result<()> {
    // Only the interactive run seeds a default config file
    let interactive = args.command.is_none();
    let mut settings = load_settings(args.config.as_deref(), interactive);
    if let Some(route) = args.route.as_deref() {
        settings.ui.initial_route = route.to_string();
    }

    let storage = open_storage(&args, &settings);
    let mut store = SelectionStore::new(storage);

    match args.command {
        None => skewnono_tui::run(AppState::with_settings(store, settings)),
        Some(Command::Show) => headless::show(&store),
        Some(Command::Select { fab, tool }) => headless::select(
            &mut store,
            fab.as_deref(),
            tool.as_deref(),
            settings.behavior.strict_selection,
        ),
        Some(Command::Clear) => headless::clear(&mut store),
    }
}

/// Explicit config is read as-is. The default location is read, and seeded
/// with a commented template when `seed_default` is set.
fn load_settings(explicit: Option<&Path>, seed_default: bool) -> Settings {
    match explicit {
        Some(path) => config::load_settings(path),
        None => {
            let path = config::default_config_path();
            if seed_default {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not create default config: {}", e);
                }
            }
            config::load_settings(&path)
        }
    }
}

fn open_storage(args: &Args, settings: &Settings) -> Box<dyn KeyValueStore> {
    if args.ephemeral {
        info!("Using in-memory storage");
        return Box::new(MemoryStore::new());
    }

    let dir = config::resolve_storage_dir(settings, args.storage_dir.as_deref());
    info!("Using storage dir {:?}", dir);
    Box::new(FileStore::new(dir))
}
