//! Command-line driver: deal a game and play it out turn by turn.
//!
//! Run with: `cargo run -- --players 3`
//! Set `RUST_LOG=uno_engine=debug` to see every play and draw.

use anyhow::{Context, Result};
use clap::Parser;
use uno_engine::{GameConfig, UnoGame, DEFAULT_SEED};

/// Simulate a game of UNO
#[derive(Parser, Debug)]
#[command(name = "uno")]
#[command(about = "Simulate a deterministic game of UNO", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Shuffle seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after this many turns if nobody has won
    #[arg(short = 't', long, default_value_t = 1000)]
    max_turns: usize,

    /// Print each snapshot as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.players).with_seed(cli.seed);
    let mut game = UnoGame::with_config(config).context("invalid game configuration")?;
    game.initialize();
    print_state(&game, cli.json)?;

    let mut turns = 0;
    while !game.is_game_over() && turns < cli.max_turns {
        game.play_turn()?;
        print_state(&game, cli.json)?;
        turns += 1;
    }

    match game.winner() {
        Some(winner) => println!("{} wins after {} turns", winner, turns),
        None => println!("No winner after {} turns", turns),
    }

    Ok(())
}

fn print_state(game: &UnoGame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&game.snapshot())?);
    } else {
        println!("{}", game.state_string());
    }
    Ok(())
}
