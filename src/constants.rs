//! Constants for board dimensions, directions, and agent parameters.
//!
//! The board is stored as a dense row-major array, so directions are
//! expressed as `(row, col)` steps rather than flat index offsets.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board that still fits the four seeded center cells with room to play.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest board the terminal front-end can label with single-width columns.
pub const MAX_BOARD_SIZE: usize = 26;

/// Board size used when none is configured. Standard Othello is 8x8.
pub const DEFAULT_BOARD_SIZE: usize = 8;

// =============================================================================
// Directions
// =============================================================================

/// The 8 compass directions as `(d_row, d_col)` unit steps.
/// Order: North, South, East, West, NE, NW, SE, SW
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),  // North (up one row)
    (1, 0),   // South (down one row)
    (0, 1),   // East (right one column)
    (0, -1),  // West (left one column)
    (-1, 1),  // NE (diagonal)
    (-1, -1), // NW (diagonal)
    (1, 1),   // SE (diagonal)
    (1, -1),  // SW (diagonal)
];

// =============================================================================
// Agent Parameters
// =============================================================================

/// Probability that the heuristic agent ignores capture counts and picks a
/// legal move uniformly at random.
pub const PROB_RANDOM_MOVE: f64 = 0.5;

/// Consecutive illegal positions a move provider may return before the turn
/// is abandoned with an error.
pub const MAX_ILLEGAL_ATTEMPTS: usize = 16;

// =============================================================================
// Display Glyphs
// =============================================================================

/// Glyph for a cell owned by X.
pub const GLYPH_X: char = 'X';

/// Glyph for a cell owned by O.
pub const GLYPH_O: char = 'O';

/// Glyph for an empty cell.
pub const GLYPH_EMPTY: char = '.';

/// Glyph for an empty cell that is a legal move (move assistance).
pub const GLYPH_HINT: char = '*';
