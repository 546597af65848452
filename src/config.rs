//! Game setup collected before the board is built.

use crate::board::Player;
use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{BoardError, ConfigError};

/// Who sits in each seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Agent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// 1 = human (X) against the agent (O), 2 = two humans.
    pub players: u8,
    /// Mark legal moves on the board when prompting humans.
    pub show_moves: bool,
    /// Fixed seed for the agent; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: 1,
            show_moves: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check every field. Must pass before a board is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            }
            .into());
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::TooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if !(1..=2).contains(&self.players) {
            return Err(ConfigError::Players(self.players));
        }
        Ok(())
    }

    pub fn seat(&self, player: Player) -> Seat {
        match (self.players, player) {
            (1, Player::O) => Seat::Agent,
            _ => Seat::Human,
        }
    }
}
