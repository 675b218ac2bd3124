//! Breadth-first search over a chessboard's knight-move graph,
//! reporting after how many moves each square first becomes reachable.

pub use board::*;
pub use config::*;
pub use pretty::*;
pub use square::*;
pub use tour::*;

mod board;
mod config;
mod pretty;
mod square;
mod tour;
