//! Reversi-Rust: Othello in the terminal.
//!
//! ## Usage
//!
//! - `reversi-rust` - Play against the computer on an 8x8 board
//! - `reversi-rust --players 2 --size 6 play` - Two humans on a 6x6 board
//! - `reversi-rust --seed 7 demo` - Watch the computer play itself

use std::cell::RefCell;
use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi_rust::agent::HeuristicAgent;
use reversi_rust::board::{Board, Player, Point};
use reversi_rust::config::{GameConfig, Seat};
use reversi_rust::console::{ConsolePlayer, ask_yes_no};
use reversi_rust::constants::DEFAULT_BOARD_SIZE;
use reversi_rust::game::{Game, MoveProvider, Outcome, Step, Tally};
use reversi_rust::movegen::LegalMoves;

/// Reversi-Rust: Othello against a human or the computer
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (N for an NxN board, at least 4)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Number of human players: 1 (you are X against the computer) or 2
    #[arg(long, default_value_t = 1)]
    players: u8,

    /// Mark legal moves with '*' when prompting
    #[arg(long)]
    show_moves: bool,

    /// Seed for the computer player
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, with a replay prompt after each game
    Play,
    /// Let the computer play both sides and print the result
    Demo,
}

/// Lets one console player sit in both seats.
struct SharedSeat<'a, P>(&'a RefCell<P>);

impl<P: MoveProvider> MoveProvider for SharedSeat<'_, P> {
    fn choose_move(&mut self, board: &Board, player: Player, moves: &LegalMoves) -> Result<Point> {
        self.0.borrow_mut().choose_move(board, player, moves)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        board_size: cli.size,
        players: cli.players,
        show_moves: cli.show_moves,
        seed: cli.seed,
    };
    config.validate().context("invalid game configuration")?;
    info!(?config, "configuration accepted");

    match cli.command {
        Some(Commands::Demo) => run_demo(&config),
        Some(Commands::Play) | None => run_play(&config),
    }
}

fn new_agent(config: &GameConfig) -> HeuristicAgent {
    config
        .seed
        .map(HeuristicAgent::with_seed)
        .unwrap_or_default()
}

fn run_play(config: &GameConfig) -> Result<()> {
    let mut agent = new_agent(config);

    loop {
        let mut game = Game::new(config.board_size)?;
        {
            let human = RefCell::new(ConsolePlayer::new(io::stdin().lock(), io::stdout(), config.show_moves));
            let mut x_seat = SharedSeat(&human);
            let mut o_human = SharedSeat(&human);
            let o_seat: &mut dyn MoveProvider = match config.seat(Player::O) {
                Seat::Agent => &mut agent,
                Seat::Human => &mut o_human,
            };

            loop {
                match game.step(&mut x_seat, o_seat).context("game aborted")? {
                    Step::Passed(player) => println!("Player {player} has no legal moves and passes."),
                    Step::Moved { .. } => {}
                    Step::Terminal(_) => break,
                }
            }
        }

        print!("{}", game.board());
        if let Some(tally) = game.tally() {
            report(&tally);
        }
        info!(moves = game.history().len(), "round finished");

        if !ask_yes_no(&mut io::stdin().lock(), &mut io::stdout(), "Play again?")? {
            return Ok(());
        }
    }
}

fn run_demo(config: &GameConfig) -> Result<()> {
    println!("Reversi-Rust: computer vs computer on {0}x{0}\n", config.board_size);

    let mut x = new_agent(config);
    let mut o = match config.seed {
        Some(seed) => HeuristicAgent::with_seed(seed.wrapping_add(1)),
        None => HeuristicAgent::default(),
    };
    let mut game = Game::new(config.board_size)?;
    let tally = game.play_out(&mut x, &mut o).context("game aborted")?;

    for (i, record) in game.history().iter().enumerate() {
        println!(
            "{:>3}. {} plays {} {}",
            i + 1,
            record.player,
            record.point.row + 1,
            record.point.col + 1
        );
    }
    println!("\n{}", game.board());
    report(&tally);
    Ok(())
}

fn report(tally: &Tally) {
    println!("Final score: X {} - O {}", tally.x, tally.o);
    match tally.outcome() {
        Outcome::Winner(p) => println!("Player {p} wins!"),
        Outcome::Draw => println!("It's a draw."),
    }
}
