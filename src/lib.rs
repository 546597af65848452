//! Reversi-Rust: Othello on a configurable square board.
//!
//! This crate provides the board, legal-move generation, the turn loop, and a
//! single-ply computer opponent, plus a terminal front-end for human players.
//!
//! ## Modules
//!
//! - [`constants`] - Board size bounds, directions, and agent parameters
//! - [`board`] - Players, cells, and the grid
//! - [`movegen`] - Ray scanning and legal-move generation
//! - [`game`] - Turn sequencing, passes, and scoring
//! - [`agent`] - Heuristic computer opponent
//! - [`console`] - Terminal rendering and human input
//! - [`config`] - Game setup validation
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use reversi_rust::agent::HeuristicAgent;
//! use reversi_rust::game::{Game, Outcome};
//!
//! let mut game = Game::new(6).unwrap();
//! let mut x = HeuristicAgent::with_seed(1);
//! let mut o = HeuristicAgent::with_seed(2);
//!
//! let tally = game.play_out(&mut x, &mut o).unwrap();
//! match tally.outcome() {
//!     Outcome::Winner(p) => println!("{p} wins {}-{}", tally.x, tally.o),
//!     Outcome::Draw => println!("draw"),
//! }
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod movegen;
