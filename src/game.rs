//! Turn sequencing: alternating play, passes, and termination.
//!
//! Each call to [`Game::step`] plays exactly one turn. A player with no legal
//! move passes; when both players pass back to back the game is over and the
//! final tally is reported.

use tracing::{debug, info, warn};

use crate::board::{Board, Player, Point};
use crate::constants::MAX_ILLEGAL_ATTEMPTS;
use crate::error::{BoardError, GameError};
use crate::movegen::{LegalMoves, legal_moves};

/// Source of moves for one seat (a human front-end or an agent).
///
/// Implementations should return a key of `moves`. Anything else is rejected
/// and the provider is asked again.
pub trait MoveProvider {
    fn choose_move(&mut self, board: &Board, player: Player, moves: &LegalMoves) -> anyhow::Result<Point>;
}

/// One applied move, kept for auditing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub point: Point,
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Cell counts at the end of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    pub x: usize,
    pub o: usize,
}

impl Tally {
    pub fn of(board: &Board) -> Self {
        Self {
            x: board.count_owned(Player::X),
            o: board.count_owned(Player::O),
        }
    }

    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.x.cmp(&self.o) {
            Ordering::Greater => Outcome::Winner(Player::X),
            Ordering::Less => Outcome::Winner(Player::O),
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// What a single turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Moved { player: Player, point: Point, flipped: usize },
    Passed(Player),
    Terminal(Tally),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Active { player: Player, passes: u8 },
    Terminal(Tally),
}

/// A game in progress.
pub struct Game {
    board: Board,
    state: State,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a new game on a freshly seeded board. X moves first.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?, Player::X))
    }

    /// Resume from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            state: State::Active {
                player: to_move,
                passes: 0,
            },
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player on turn, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            State::Active { player, .. } => Some(player),
            State::Terminal(_) => None,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, State::Terminal(_))
    }

    /// Final tally, once the game is over.
    pub fn tally(&self) -> Option<Tally> {
        match self.state {
            State::Terminal(t) => Some(t),
            State::Active { .. } => None,
        }
    }

    /// Legal moves for the player on turn.
    pub fn legal_moves(&self) -> LegalMoves {
        match self.state {
            State::Active { player, .. } => legal_moves(&self.board, player),
            State::Terminal(_) => LegalMoves::default(),
        }
    }

    /// Play one turn, asking `x` or `o` for a move as appropriate.
    pub fn step(&mut self, x: &mut dyn MoveProvider, o: &mut dyn MoveProvider) -> Result<Step, GameError> {
        let State::Active { player, passes } = self.state else {
            return Err(GameError::Finished);
        };

        let moves = legal_moves(&self.board, player);
        if moves.is_empty() {
            if passes > 0 {
                let tally = Tally::of(&self.board);
                info!(x = tally.x, o = tally.o, outcome = ?tally.outcome(), "game over");
                self.state = State::Terminal(tally);
                return Ok(Step::Terminal(tally));
            }
            debug!(%player, "no legal moves, passing");
            self.state = State::Active {
                player: !player,
                passes: passes + 1,
            };
            return Ok(Step::Passed(player));
        }

        let point = match player {
            Player::X => request_move(x, &self.board, player, &moves)?,
            Player::O => request_move(o, &self.board, player, &moves)?,
        };
        let captures = moves
            .get(point)
            .ok_or(GameError::IllegalMove { point, attempts: 1 })?;
        self.board.place(point, player, captures)?;
        self.history.push(MoveRecord { player, point });
        debug!(%player, %point, flipped = captures.len(), "move applied");

        self.state = State::Active {
            player: !player,
            passes: 0,
        };
        Ok(Step::Moved {
            player,
            point,
            flipped: captures.len(),
        })
    }

    /// Run turns until the game ends and return the final tally.
    pub fn play_out(&mut self, x: &mut dyn MoveProvider, o: &mut dyn MoveProvider) -> Result<Tally, GameError> {
        loop {
            if let Step::Terminal(tally) = self.step(x, o)? {
                return Ok(tally);
            }
        }
    }
}

/// Ask `provider` until it returns a legal point.
fn request_move(
    provider: &mut dyn MoveProvider,
    board: &Board,
    player: Player,
    moves: &LegalMoves,
) -> Result<Point, GameError> {
    let mut attempts = 0;
    loop {
        let point = provider
            .choose_move(board, player, moves)
            .map_err(GameError::Provider)?;
        if moves.contains(point) {
            return Ok(point);
        }
        attempts += 1;
        warn!(%player, %point, attempts, "rejected illegal move");
        if attempts >= MAX_ILLEGAL_ATTEMPTS {
            return Err(GameError::IllegalMove { point, attempts });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Plays a fixed list of points, then the first legal move.
    struct Scripted(Vec<Point>);

    impl MoveProvider for Scripted {
        fn choose_move(&mut self, _: &Board, _: Player, moves: &LegalMoves) -> anyhow::Result<Point> {
            if self.0.is_empty() {
                return moves.points().next().ok_or_else(|| anyhow::anyhow!("no moves"));
            }
            Ok(self.0.remove(0))
        }
    }

    struct Broken;

    impl MoveProvider for Broken {
        fn choose_move(&mut self, _: &Board, _: Player, _: &LegalMoves) -> anyhow::Result<Point> {
            anyhow::bail!("input closed")
        }
    }

    #[test]
    fn test_x_moves_first() {
        let game = Game::new(8).unwrap();
        assert_eq!(game.to_move(), Some(Player::X));
        assert!(!game.is_over());
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn test_step_applies_move() {
        let mut game = Game::new(4).unwrap();
        let mut x = Scripted(vec![Point::new(0, 2)]);
        let mut o = Scripted(vec![]);
        let step = game.step(&mut x, &mut o).unwrap();
        assert_eq!(
            step,
            Step::Moved {
                player: Player::X,
                point: Point::new(0, 2),
                flipped: 1
            }
        );
        assert_eq!(game.board().cell(Point::new(1, 2)), Cell::Owned(Player::X));
        assert_eq!(game.to_move(), Some(Player::O));
        assert_eq!(
            game.history(),
            &[MoveRecord {
                player: Player::X,
                point: Point::new(0, 2)
            }]
        );
    }

    #[test]
    fn test_illegal_attempts_are_retried() {
        let mut game = Game::new(4).unwrap();
        let mut x = Scripted(vec![Point::new(0, 0), Point::new(1, 1), Point::new(3, 1)]);
        let mut o = Scripted(vec![]);
        let step = game.step(&mut x, &mut o).unwrap();
        assert!(matches!(step, Step::Moved { point, .. } if point == Point::new(3, 1)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_persistent_illegal_provider_fails() {
        let mut game = Game::new(4).unwrap();
        let mut x = Scripted(vec![Point::new(0, 0); MAX_ILLEGAL_ATTEMPTS]);
        let mut o = Scripted(vec![]);
        let before = game.board().clone();
        let err = game.step(&mut x, &mut o).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { attempts, .. } if attempts == MAX_ILLEGAL_ATTEMPTS));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Some(Player::X));
    }

    #[test]
    fn test_provider_error_propagates() {
        let mut game = Game::new(4).unwrap();
        let err = game.step(&mut Broken, &mut Broken).unwrap_err();
        assert!(matches!(err, GameError::Provider(_)));
    }

    #[test]
    fn test_single_pass_switches_player() {
        // O has no anchor anywhere; X can capture at (0,3)
        let board = Board::from_rows(&["XOO.", "....", "....", "...."]).unwrap();
        let mut game = Game::from_board(board, Player::O);
        let before = game.board().clone();
        let step = game.step(&mut Broken, &mut Broken).unwrap();
        assert_eq!(step, Step::Passed(Player::O));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Some(Player::X));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_double_pass_terminates() {
        let board = Board::from_rows(&["XXX.", "....", "....", "..OO"]).unwrap();
        let mut game = Game::from_board(board, Player::X);
        // Neither side can capture anything
        assert_eq!(game.step(&mut Broken, &mut Broken).unwrap(), Step::Passed(Player::X));
        let step = game.step(&mut Broken, &mut Broken).unwrap();
        assert_eq!(step, Step::Terminal(Tally { x: 3, o: 2 }));
        assert!(game.is_over());
        assert_eq!(game.to_move(), None);
        assert_eq!(game.tally().map(|t| t.outcome()), Some(Outcome::Winner(Player::X)));
        assert!(matches!(game.step(&mut Broken, &mut Broken), Err(GameError::Finished)));
    }

    #[test]
    fn test_move_resets_pass_streak() {
        // O passes, X moves, then O must be asked again rather than ending
        let board = Board::from_rows(&["XOO.", "....", "....", "...."]).unwrap();
        let mut game = Game::from_board(board, Player::O);
        let mut x = Scripted(vec![]);
        let mut o = Scripted(vec![]);
        assert_eq!(game.step(&mut x, &mut o).unwrap(), Step::Passed(Player::O));
        assert!(matches!(game.step(&mut x, &mut o).unwrap(), Step::Moved { player: Player::X, .. }));
        assert_eq!(game.board().count_owned(Player::O), 0);
        assert_eq!(game.step(&mut x, &mut o).unwrap(), Step::Passed(Player::O));
        assert_eq!(game.step(&mut x, &mut o).unwrap(), Step::Terminal(Tally { x: 4, o: 0 }));
    }

    #[test]
    fn test_tally_outcome() {
        assert_eq!(Tally { x: 3, o: 5 }.outcome(), Outcome::Winner(Player::O));
        assert_eq!(Tally { x: 8, o: 8 }.outcome(), Outcome::Draw);
    }
}
