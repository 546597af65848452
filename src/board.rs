//! Board state: players, cells, and the square grid.
//!
//! The grid is a dense row-major array indexed by `row * size + col`. Every
//! position is always mapped to a [`Cell`]; nothing is ever removed.

use std::fmt;
use std::ops::Not;

use crate::constants::{GLYPH_EMPTY, GLYPH_O, GLYPH_X, MIN_BOARD_SIZE};
use crate::error::BoardError;

/// One of the two players. X always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::X => GLYPH_X,
            Player::O => GLYPH_O,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The state of one board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Owned(p) => Some(p),
            Cell::Empty => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Owned(p) => p.glyph(),
            Cell::Empty => GLYPH_EMPTY,
        }
    }
}

/// A 0-based `(row, col)` board position.
///
/// Ordering is row-major, so sorted collections of points iterate the board
/// top to bottom, left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The N x N grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given size with the four center cells seeded.
    ///
    /// With `c = size / 2`, `(c-1, c-1)` and `(c, c)` belong to X while
    /// `(c-1, c)` and `(c, c-1)` belong to O. Odd sizes use the same floor
    /// division.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        let c = size / 2;
        board.set(Point::new(c - 1, c - 1), Cell::Owned(Player::X));
        board.set(Point::new(c, c), Cell::Owned(Player::X));
        board.set(Point::new(c - 1, c), Cell::Owned(Player::O));
        board.set(Point::new(c, c - 1), Cell::Owned(Player::O));
        Ok(board)
    }

    /// Build a board from ASCII rows of `X`, `O` and `.` (whitespace ignored).
    ///
    /// Unlike [`Board::new`] the center is not seeded; the rows describe the
    /// whole position.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let before = cells.len();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                cells.push(match ch {
                    GLYPH_X => Cell::Owned(Player::X),
                    GLYPH_O => Cell::Owned(Player::O),
                    GLYPH_EMPTY => Cell::Empty,
                    _ => return Err(BoardError::MalformedRow { row, line: line.to_string() }),
                });
            }
            if cells.len() - before != size {
                return Err(BoardError::MalformedRow { row, line: line.to_string() });
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, pt: Point) -> usize {
        pt.row * self.size + pt.col
    }

    fn set(&mut self, pt: Point, cell: Cell) {
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    /// Whether a signed coordinate pair lies on the board.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.row < self.size && pt.col < self.size
    }

    /// Checked cell lookup.
    pub fn get(&self, pt: Point) -> Result<Cell, BoardError> {
        if !self.contains(pt) {
            return Err(BoardError::OutOfBounds {
                point: pt,
                size: self.size,
            });
        }
        Ok(self.cell(pt))
    }

    /// Cell lookup for callers that have already bounds-checked.
    ///
    /// Panics if `pt` is off the board.
    pub fn cell(&self, pt: Point) -> Cell {
        assert!(self.contains(pt), "point {pt} is off a {0}x{0} board", self.size);
        self.cells[self.idx(pt)]
    }

    /// Place `player` at `pt` and flip every point in `captures`.
    ///
    /// Nothing is modified unless the whole placement succeeds.
    pub fn place<'a, I>(&mut self, pt: Point, player: Player, captures: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        if self.get(pt)? != Cell::Empty {
            return Err(BoardError::Occupied(pt));
        }
        let captures: Vec<Point> = captures.into_iter().copied().collect();
        for &q in &captures {
            if self.get(q)?.is_empty() {
                return Err(BoardError::EmptyCellFlip(q));
            }
        }

        self.set(pt, Cell::Owned(player));
        for q in captures {
            if let Cell::Owned(owner) = self.cell(q) {
                self.set(q, Cell::Owned(!owner));
            }
        }
        Ok(())
    }

    /// Number of cells owned by `player`.
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Owned(player))
            .count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| Point::new(row, col)))
    }

    /// Empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&pt| self.cell(pt).is_empty())
    }
}

impl Board {
    /// Draw the grid with 1-based labels, choosing each cell's glyph with `glyph`.
    pub fn render_with(&self, glyph: impl Fn(Point, Cell) -> char) -> String {
        let mut out = String::from("   ");
        for col in 1..=self.size {
            out.push_str(&format!("{col:>2} "));
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&format!("{:>2} ", row + 1));
            for col in 0..self.size {
                let pt = Point::new(row, col);
                out.push_str(&format!(" {} ", glyph(pt, self.cell(pt))));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_, cell| cell.glyph()))
    }
}
