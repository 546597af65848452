//! Terminal front-end: board rendering and the human move prompt.
//!
//! The prompt loop owns all input validation. Coordinates are typed 1-based
//! (`row col`) and converted to 0-based points before they reach the game.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};

use crate::board::{Board, Player, Point};
use crate::constants::GLYPH_HINT;
use crate::game::MoveProvider;
use crate::movegen::LegalMoves;

/// ANSI: clear the screen and move the cursor to the upper left.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render the board, marking legal moves with `*` when `hints` is given.
pub fn render(board: &Board, hints: Option<&LegalMoves>) -> String {
    board.render_with(|pt, cell| match hints {
        Some(moves) if moves.contains(pt) => GLYPH_HINT,
        _ => cell.glyph(),
    })
}

/// Parse a 1-based `row col` line, or return the message to show the player.
fn parse_move(line: &str, size: usize) -> Result<Point, String> {
    let mut parts = line.split_whitespace().map(str::parse::<i64>);
    let (Some(Ok(row)), Some(Ok(col))) = (parts.next(), parts.next()) else {
        return Err("Invalid input. Please enter two numbers.".to_string());
    };
    let check = |what: &str, v: i64| {
        if v < 1 {
            Err(format!("Invalid {what}: {v} (too small)."))
        } else if v > size as i64 {
            Err(format!("Invalid {what}: {v} (too large)."))
        } else {
            Ok(v as usize - 1)
        }
    };
    let row = check("row", row)?;
    let col = check("column", col)?;
    Ok(Point::new(row, col))
}

/// A human player reading moves from `input` and drawing to `output`.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    show_moves: bool,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W, show_moves: bool) -> Self {
        Self {
            input,
            output,
            show_moves,
            clear_screen: true,
        }
    }

    /// Disable the ANSI screen clear (for logs and tests).
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, board: &Board, player: Player, moves: &LegalMoves, error: Option<&str>) -> anyhow::Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "Player {player}'s turn.")?;
        let hints = self.show_moves.then_some(moves);
        write!(self.output, "{}", render(board, hints))?;
        if let Some(msg) = error {
            writeln!(self.output, "{msg}")?;
        }
        write!(self.output, "Enter your move (row and column, e.g., '3 4'): ")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveProvider for ConsolePlayer<R, W> {
    fn choose_move(&mut self, board: &Board, player: Player, moves: &LegalMoves) -> anyhow::Result<Point> {
        let mut error: Option<String> = None;
        loop {
            self.prompt(board, player, moves, error.as_deref())?;

            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .context("failed to read move")?;
            if n == 0 {
                bail!("input closed while waiting for player {player}");
            }

            match parse_move(&line, board.size()) {
                Ok(pt) if moves.contains(pt) => return Ok(pt),
                Ok(_) => error = Some("Invalid move. Please choose an empty and valid spot.".to_string()),
                Err(msg) => error = Some(msg),
            }
        }
    }
}

/// Ask a yes/no question; anything starting with `y` counts as yes.
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<bool> {
    write!(output, "{question} (y/n): ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().to_lowercase().starts_with('y'))
}
