use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::engine::{Engine, EngineConfig};
use crate::core::terminal::TerminalSession;
use crate::games::get_all_games;
use crate::games::gomoku::input::KEY_BINDINGS;
use crate::games::gomoku::{GameSummary, GomokuGame, GomokuRenderer};

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row in the terminal")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game (the default)
    Play(PlayArgs),
    /// Show the key bindings
    Keys,
    /// List available games
    List,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// File that receives the log; the terminal belongs to the game
    #[arg(long, default_value = "gomoku.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Exit as soon as someone wins instead of showing the final board
    #[arg(long)]
    pub exit_on_finish: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(cli.play)) {
        Commands::Play(args) => {
            let summary = play(&args).await?;
            report(&summary, args.json)?;
        }
        Commands::Keys => {
            for (keys, action) in KEY_BINDINGS {
                println!("{keys:<20} {action}");
            }
        }
        Commands::List => {
            println!("Available games:");
            for info in get_all_games() {
                println!("  {} - {}", info.name, info.description);
            }
        }
    }

    Ok(())
}

/// Send tracing output to a file
fn init_logging(args: &PlayArgs) -> Result<()> {
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("failed to create log file {}", args.log_file.display()))?;
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

async fn play(args: &PlayArgs) -> Result<GameSummary> {
    init_logging(args)?;
    info!("starting gomoku");

    let engine = Engine::new(
        GomokuGame::new(),
        GomokuRenderer,
        EngineConfig {
            exit_on_finish: args.exit_on_finish,
        },
    );

    let game = {
        let mut session = TerminalSession::new();
        engine.run(&mut session.terminal).await?
    };

    let summary = game.summary();
    info!(moves = summary.moves, outcome = ?summary.outcome, "session finished");
    Ok(summary)
}

fn report(summary: &GameSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_plays_with_defaults() {
        let cli = Cli::try_parse_from(["gomoku"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.play.log_file, PathBuf::from("gomoku.log"));
        assert_eq!(cli.play.log_level, "info");
        assert!(!cli.play.exit_on_finish);
        assert!(!cli.play.json);
    }

    #[test]
    fn test_play_flags() {
        let cli =
            Cli::try_parse_from(["gomoku", "play", "--json", "--exit-on-finish", "--log-file", "x.log"])
                .unwrap();
        match cli.command {
            Some(Commands::Play(args)) => {
                assert!(args.json);
                assert!(args.exit_on_finish);
                assert_eq!(args.log_file, PathBuf::from("x.log"));
            }
            other => panic!("expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["gomoku", "--json"]).unwrap();
        assert!(cli.play.json);
    }

    #[test]
    fn test_second_logging_init_is_reported() {
        let dir = std::env::temp_dir().join(format!("gomoku-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut args = Cli::try_parse_from(["gomoku"]).unwrap().play;
        args.log_file = dir.join("first.log");
        // Only one global subscriber per process, so the second install must error
        let _ = init_logging(&args);
        args.log_file = dir.join("second.log");
        let err = init_logging(&args).unwrap_err();
        assert!(err.to_string().starts_with("failed to install log subscriber"));
    }

    #[test]
    fn test_keys_subcommand() {
        let cli = Cli::try_parse_from(["gomoku", "keys"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Keys)));
    }
}
