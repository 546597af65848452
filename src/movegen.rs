//! Capture detection and legal-move generation.
//!
//! A move at an empty point is legal when at least one of the 8 rays leaving
//! it crosses a contiguous run of opponent cells that ends on one of the
//! mover's own cells (the anchor). The run is what gets flipped.
//!
//! Results are tied to the board they were computed on and must be
//! regenerated after every placement.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Board, Cell, Player, Point};
use crate::constants::DIRECTIONS;

/// Opponent cells flipped by a single move. Never contains the move itself.
pub type CaptureSet = BTreeSet<Point>;

/// Scan one direction from `origin` for a capturable run.
///
/// Returns the opponent cells between `origin` and the nearest anchor, or an
/// empty vector if the ray hits an empty cell or the board edge first, or if
/// the anchor is directly adjacent.
pub fn scan_ray(board: &Board, origin: Point, player: Player, (dr, dc): (isize, isize)) -> Vec<Point> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut row = origin.row as isize + dr;
    let mut col = origin.col as isize + dc;

    while board.in_bounds(row, col) {
        let pt = Point::new(row as usize, col as usize);
        match board.cell(pt) {
            Cell::Owned(p) if p == opponent => run.push(pt),
            Cell::Owned(_) => return run,
            Cell::Empty => return Vec::new(),
        }
        row += dr;
        col += dc;
    }

    // Ran off the edge without an anchor
    Vec::new()
}

/// Union of the 8 directional scans for a move at `origin`.
pub fn capture_set(board: &Board, origin: Point, player: Player) -> CaptureSet {
    DIRECTIONS
        .iter()
        .flat_map(|&dir| scan_ray(board, origin, player, dir))
        .collect()
}

/// Legal moves for one player, keyed by point in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: BTreeMap<Point, CaptureSet>,
}

impl LegalMoves {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.moves.contains_key(&pt)
    }

    /// Capture set for a move, if it is legal.
    pub fn get(&self, pt: Point) -> Option<&CaptureSet> {
        self.moves.get(&pt)
    }

    /// Moves and their capture sets in row-major order.
    pub fn iter(&self) -> btree_map::Iter<'_, Point, CaptureSet> {
        self.moves.iter()
    }

    /// Legal points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.moves.keys().copied()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = (&'a Point, &'a CaptureSet);
    type IntoIter = btree_map::Iter<'a, Point, CaptureSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generate every legal move for `player` on the current board.
pub fn legal_moves(board: &Board, player: Player) -> LegalMoves {
    let moves = board
        .empty_points()
        .filter_map(|pt| {
            let captures = capture_set(board, pt, player);
            (!captures.is_empty()).then_some((pt, captures))
        })
        .collect();
    LegalMoves { moves }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: (isize, isize) = (-1, 0);
    const S: (isize, isize) = (1, 0);
    const E: (isize, isize) = (0, 1);
    const W: (isize, isize) = (0, -1);
    const SE: (isize, isize) = (1, 1);

    fn pts(v: &[(usize, usize)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn test_scan_empty_neighbor() {
        let board = Board::new(4).unwrap();
        // (0,0) looking east sees an empty cell immediately
        assert!(scan_ray(&board, Point::new(0, 0), Player::X, E).is_empty());
    }

    #[test]
    fn test_scan_off_board() {
        let board = Board::new(4).unwrap();
        assert!(scan_ray(&board, Point::new(0, 2), Player::X, N).is_empty());
        assert!(scan_ray(&board, Point::new(0, 0), Player::X, W).is_empty());
    }

    #[test]
    fn test_scan_adjacent_anchor_captures_nothing() {
        let board = Board::from_rows(&["XX..", "....", "....", "...."]).unwrap();
        assert!(scan_ray(&board, Point::new(0, 2), Player::X, W).is_empty());
    }

    #[test]
    fn test_scan_run_with_anchor() {
        let board = Board::from_rows(&["XOOO.", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(
            scan_ray(&board, Point::new(0, 4), Player::X, W),
            pts(&[(0, 3), (0, 2), (0, 1)])
        );
        // Same run, no anchor for O
        assert!(scan_ray(&board, Point::new(0, 4), Player::O, W).is_empty());
    }

    #[test]
    fn test_scan_stops_at_first_anchor() {
        let board = Board::from_rows(&["XOXO.", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(scan_ray(&board, Point::new(0, 4), Player::X, W), pts(&[(0, 3)]));
    }

    #[test]
    fn test_scan_run_hits_edge() {
        let board = Board::from_rows(&["OOO.", "....", "....", "...."]).unwrap();
        assert!(scan_ray(&board, Point::new(0, 3), Player::X, W).is_empty());
    }

    #[test]
    fn test_scan_run_broken_by_gap() {
        let board = Board::from_rows(&["X.OO.", ".....", ".....", ".....", "....."]).unwrap();
        assert!(scan_ray(&board, Point::new(0, 4), Player::X, W).is_empty());
    }

    #[test]
    fn test_scan_diagonal() {
        let board = Board::from_rows(&["....", ".O..", "..O.", "...X"]).unwrap();
        assert_eq!(
            scan_ray(&board, Point::new(0, 0), Player::X, SE),
            pts(&[(1, 1), (2, 2)])
        );
        assert!(scan_ray(&board, Point::new(0, 0), Player::X, S).is_empty());
    }

    #[test]
    fn test_capture_set_unions_directions() {
        // X at (2,2) captures west and north runs
        let board = Board::from_rows(&["..X..", "..O..", "XO...", ".....", "....."]).unwrap();
        let captures = capture_set(&board, Point::new(2, 2), Player::X);
        assert_eq!(captures, pts(&[(1, 2), (2, 1)]).into_iter().collect::<CaptureSet>());
        assert!(!captures.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_initial_legal_moves_4x4() {
        let board = Board::new(4).unwrap();
        let moves = legal_moves(&board, Player::X);
        let expected = [
            ((0, 2), (1, 2)),
            ((1, 3), (1, 2)),
            ((2, 0), (2, 1)),
            ((3, 1), (2, 1)),
        ];
        assert_eq!(moves.len(), 4);
        for (mv, cap) in expected {
            let set = moves.get(Point::from(mv)).unwrap();
            assert_eq!(set.len(), 1);
            assert!(set.contains(&Point::from(cap)));
        }
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::new(8).unwrap();
        let moves: Vec<Point> = legal_moves(&board, Player::O).points().collect();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_no_legal_moves() {
        let board = Board::from_rows(&["XXXX", "XXXX", "XXXX", "XXX."]).unwrap();
        assert!(legal_moves(&board, Player::O).is_empty());
        assert!(legal_moves(&board, Player::X).is_empty());
    }

    #[test]
    fn test_legal_iff_nonempty_union() {
        let board = Board::from_rows(&["X.O..", ".O...", "..X..", "O...O", "....X"]).unwrap();
        for player in [Player::X, Player::O] {
            let moves = legal_moves(&board, player);
            for pt in board.empty_points() {
                let union = capture_set(&board, pt, player);
                assert_eq!(moves.contains(pt), !union.is_empty(), "{player} at {pt}");
            }
        }
    }
}
