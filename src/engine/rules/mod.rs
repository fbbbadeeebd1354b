//! Terminal-condition rules: win detection and board-full checks.

pub mod draw;
pub mod win;
