//! Text rendering of a game board.
//!
//! ```
//! use memory_match::cards::{Deck, Symbol};
//! use memory_match::game::GameState;
//! use memory_match::render::Board;
//!
//! let symbols: Vec<Symbol> = ["A", "B"].into_iter().map(Symbol::from).collect();
//! let state = GameState::new(Deck::new(&symbols));
//!
//! let frame = Board::new(&state, 2).to_string();
//! assert!(frame.contains("Attempts: 0"));
//! assert!(frame.contains(" 1 ?   2 ?"));
//! ```

use std::fmt;

use crate::cards::{Card, Symbol};
use crate::game::GameState;

/// Heading printed above the board.
pub const TITLE: &str = "Memory Game";

/// Marker for a face-down card.
pub const FACE_DOWN: &str = "?";

/// What a grid cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace<'a> {
    Hidden,
    Up(&'a Symbol),
}

impl<'a> CardFace<'a> {
    /// The face a card presents.
    #[must_use]
    pub fn of(card: &'a Card) -> Self {
        if card.is_face_up() {
            CardFace::Up(&card.value)
        } else {
            CardFace::Hidden
        }
    }
}

impl fmt::Display for CardFace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Hidden => f.write_str(FACE_DOWN),
            CardFace::Up(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// A renderable view of a game state laid out in a fixed number of columns.
#[derive(Clone, Copy, Debug)]
pub struct Board<'a> {
    state: &'a GameState,
    columns: usize,
}

impl<'a> Board<'a> {
    /// View `state` with `columns` cells per row (at least one).
    #[must_use]
    pub fn new(state: &'a GameState, columns: usize) -> Self {
        Self {
            state,
            columns: columns.max(1),
        }
    }

    /// Faces in grid order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace<'a>> + 'a {
        let state = self.state;
        state.cards().iter().map(CardFace::of)
    }

    /// Faces grouped into rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<CardFace<'a>>> {
        let faces: Vec<_> = self.faces().collect();
        faces.chunks(self.columns).map(<[_]>::to_vec).collect()
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "Attempts: {}", self.state.attempts())?;
        writeln!(f, "Time: {} seconds", self.state.elapsed_seconds())?;
        writeln!(f)?;

        for (row_index, row) in self.rows().iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, face)| {
                    let number = row_index * self.columns + col + 1;
                    format!("{:>2} {}", number, face)
                })
                .collect();
            writeln!(f, "{}", cells.join("  "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn state(names: &[&str]) -> GameState {
        let symbols: Vec<Symbol> = names.iter().map(|s| Symbol::new(*s)).collect();
        GameState::new(Deck::new(&symbols))
    }

    #[test]
    fn test_all_hidden() {
        let state = state(&["A", "B", "C"]);
        let board = Board::new(&state, 3);

        assert!(board.faces().all(|face| face == CardFace::Hidden));
        assert_eq!(board.rows().len(), 2);
        assert_eq!(board.rows()[0].len(), 3);
    }

    #[test]
    fn test_revealed_card_shows_symbol() {
        let mut state = state(&["A", "B", "C"]);
        state.reveal(1);

        let board = Board::new(&state, 3);
        let faces: Vec<_> = board.faces().collect();

        assert_eq!(faces[0], CardFace::Hidden);
        assert_eq!(faces[1].to_string(), "B");
    }

    #[test]
    fn test_frame_layout() {
        let mut state = state(&["A", "B"]);
        state.reveal(0);

        let frame = Board::new(&state, 2).to_string();
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "Attempts: 0");
        assert_eq!(lines[2], "Time: 0 seconds");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], " 1 A   2 ?");
        assert_eq!(lines[5], " 3 ?   4 ?");
    }

    #[test]
    fn test_ragged_last_row() {
        let state = state(&["A", "B", "C"]);
        let rows = Board::new(&state, 4).rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_zero_columns_clamps_to_one() {
        let state = state(&["A"]);
        assert_eq!(Board::new(&state, 0).rows().len(), 2);
    }
}
