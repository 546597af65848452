//! Single-ply heuristic move selection.
//!
//! The agent flips a fair coin each turn: heads picks any legal move
//! uniformly at random, tails picks the move that flips the most cells. It
//! never looks at the opponent's replies.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Player, Point};
use crate::constants::PROB_RANDOM_MOVE;
use crate::game::MoveProvider;
use crate::movegen::LegalMoves;

/// Computer opponent with an owned, seedable random source.
pub struct HeuristicAgent {
    rng: Rng,
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(Rng::new())
    }
}

impl HeuristicAgent {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }

    /// Agent with a reproducible move sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Rng::with_seed(seed))
    }

    /// Pick one key of `moves`, or `None` if there are no legal moves.
    pub fn select(&mut self, moves: &LegalMoves) -> Option<Point> {
        if moves.is_empty() {
            return None;
        }
        if self.rng.f64() < PROB_RANDOM_MOVE {
            let pick = moves.points().nth(self.rng.usize(..moves.len()));
            debug!(choice = ?pick, "agent picked a random move");
            pick
        } else {
            let pick = greediest(moves);
            debug!(choice = ?pick, "agent picked the greediest move");
            pick
        }
    }
}

/// The move with the largest capture set; ties go to the first in row-major order.
pub fn greediest(moves: &LegalMoves) -> Option<Point> {
    let mut best: Option<(Point, usize)> = None;
    for (&pt, captures) in moves {
        match best {
            Some((_, n)) if captures.len() <= n => {}
            _ => best = Some((pt, captures.len())),
        }
    }
    best.map(|(pt, _)| pt)
}

impl MoveProvider for HeuristicAgent {
    fn choose_move(&mut self, _board: &Board, _player: Player, moves: &LegalMoves) -> anyhow::Result<Point> {
        self.select(moves)
            .ok_or_else(|| anyhow::anyhow!("agent asked to move with no legal moves"))
    }
}
