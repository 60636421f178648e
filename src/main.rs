use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corkboard::draw::Canvas;
use corkboard::session::inspect_board;
use corkboard::{BoardCommand, BoardController, Config};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CORKBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "corkboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Sticky note corkboard with freehand ink and JSON persistence")]
struct Cli {
    /// Use this config file instead of ~/.config/corkboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a summary of a saved board
    Info {
        /// Board file (JSON)
        file: PathBuf,
    },
    /// Apply a script of board commands (one JSON object per line)
    Replay {
        /// Command script; blank lines and lines starting with '#' are skipped
        script: PathBuf,
        /// Board to load before replaying
        #[arg(long, value_name = "FILE")]
        board: Option<PathBuf>,
        /// Where to save the resulting board
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Write the documented example config to the config path
    InitConfig,
    /// Print where the config file is expected
    ConfigPath,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Info { file }) => print_info(&file),
        Some(Commands::Replay { script, board, out }) => {
            let config = load_config(cli.config.as_deref())?;
            replay(&config, &script, board.as_deref(), out.as_deref())
        }
        Some(Commands::InitConfig) => {
            let path = config_path(cli.config.as_deref())?;
            Config::create_default_file(&path)?;
            println!("Wrote example config to {}", path.display());
            Ok(())
        }
        Some(Commands::ConfigPath) => {
            println!("{}", config_path(cli.config.as_deref())?.display());
            Ok(())
        }
        None => {
            println!("corkboard: Sticky note corkboard with freehand ink and JSON persistence");
            println!();
            println!("Usage:");
            println!("  corkboard info <FILE>                      Summarise a saved board");
            println!("  corkboard replay <SCRIPT> [--board FILE] [--out FILE]");
            println!("                                             Apply board commands headlessly");
            println!("  corkboard init-config                      Write the example config");
            println!("  corkboard config-path                      Show the config location");
            println!("  corkboard --help                           Show help");
            println!();
            println!("Script lines are JSON commands, for example:");
            println!(r#"  {{"command": "add_note", "text": "Buy milk", "size": "small"}}"#);
            println!(r#"  {{"command": "toggle_drawing"}}"#);
            println!(r#"  {{"command": "pointer_down", "x": 10, "y": 10}}"#);
            Ok(())
        }
    }
}

fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::get_config_path(),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Config::load_from(&config_path(explicit)?)
}

fn print_info(file: &Path) -> Result<()> {
    let inspection = inspect_board(file)?;
    println!("board: {}", inspection.path.display());
    println!("size: {} bytes", inspection.size_bytes);
    match inspection.modified.map(|time| time.duration_since(UNIX_EPOCH)) {
        Some(Ok(since_epoch)) => println!("modified: {} (unix time)", since_epoch.as_secs()),
        _ => println!("modified: unknown"),
    }
    println!("notes: {}", inspection.notes);
    println!("lines: {}", inspection.lines);
    Ok(())
}

fn replay(config: &Config, script: &Path, board: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let mut controller = BoardController::from_config(config);
    if let Some(board) = board {
        controller.load_from(board)?;
    }

    let contents = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;

    let mut applied = 0usize;
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: BoardCommand = serde_json::from_str(line).with_context(|| {
            format!("{}:{}: invalid command", script.display(), index + 1)
        })?;
        log::debug!("Applying {:?}", command);
        controller
            .dispatch(command)
            .with_context(|| format!("{}:{}: command failed", script.display(), index + 1))?;
        applied += 1;
    }

    if let Some(out) = out {
        controller.save_to(out)?;
    }

    let canvas = controller.canvas();
    println!("commands: {applied}");
    println!("notes: {}", canvas.note_count());
    println!("lines: {}", canvas.stroke_count());
    println!("mode: {}", controller.mode());
    println!("zoom: {:.3}", controller.view().zoom);
    Ok(())
}
