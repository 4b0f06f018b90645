//! Render surface: turns a `GameState` into a text frame.

mod board;

pub use board::{Board, CardFace, FACE_DOWN, TITLE};
