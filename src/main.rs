//! Vial Layout Viewer - terminal viewer for split-keyboard layouts.
//!
//! Opens a directory of Vial `.vil` layout files and renders the decoded
//! key grid of the supported keyboards, one layer at a time. Subcommands
//! give headless access to the decoder and the layout sync utility.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vilview::cli::{DecodeArgs, InspectArgs, SyncArgs};
use vilview::config::Config;
use vilview::constants::APP_BINARY_NAME;
use vilview::models::{KeyboardProfile, PROFILES};
use vilview::tui;

/// Vial Layout Viewer - terminal viewer for split-keyboard layouts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .vil layout files
    #[arg(value_name = "DIR")]
    layouts_dir: Option<PathBuf>,

    /// Keyboard to show first (e.g., "elora", "corne")
    #[arg(short, long, value_name = "NAME")]
    keyboard: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode one keycode token
    Decode(DecodeArgs),
    /// Print the decoded grid of a layer
    Inspect(InspectArgs),
    /// Sync an Elora layout onto a Corne layout
    Sync(SyncArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        return match command {
            Command::Decode(args) => args.execute(),
            Command::Inspect(args) => args.execute(),
            Command::Sync(args) => args.execute(),
        };
    }

    // Viewer path: resolve the layouts directory and starting keyboard
    // from arguments, then config, then defaults.
    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load config: {err:#}");
        Config::default()
    });

    let base_dir = cli
        .layouts_dir
        .unwrap_or_else(|| config.layouts_dir_or_cwd());

    if !base_dir.is_dir() {
        eprintln!("Error: layouts directory not found: {}", base_dir.display());
        eprintln!();
        eprintln!("Provide a directory containing .vil layout files:");
        eprintln!("  {APP_BINARY_NAME} path/to/layouts");
        std::process::exit(1);
    }

    let keyboard_name = cli.keyboard.or_else(|| config.default_keyboard.clone());
    let profile_idx = match keyboard_name {
        Some(name) => match KeyboardProfile::position_by_name(&name) {
            Some(idx) => idx,
            None => {
                eprintln!("Error: unknown keyboard: {name}");
                eprintln!();
                eprintln!("Supported keyboards:");
                for profile in PROFILES {
                    eprintln!("  {}", profile.name);
                }
                std::process::exit(1);
            }
        },
        None => 0,
    };

    let mut state = tui::AppState::new(base_dir, profile_idx)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_viewer(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
