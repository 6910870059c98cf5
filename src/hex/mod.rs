pub mod bits;
pub mod board;
pub mod cellset;
pub mod error;
pub mod notation;
pub mod oracle;
pub mod pattern;
pub mod player;
pub mod search;
pub mod sizes;

pub mod prelude {
    pub use super::board::Board;
    pub use super::cellset::CellSet;
    pub use super::error::{HexError, Result};
    pub use super::oracle::{is_connected, is_virtually_connected, virtual_winner, winner};
    pub use super::pattern::{compare, Pattern, FORK_WIDTH_PENALTY};
    pub use super::player::{Player, Winner};
    pub use super::search::search;
    pub use super::sizes::*;
    pub use super::{bits::FixedBitset, notation};
}
