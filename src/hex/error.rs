use thiserror::Error;

/// The closed set of ways a boundary call into this crate can fail.
///
/// The solver itself never raises one of these (it is total on well-formed
/// boards). They only surface at construction, parsing, and play time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("index {index} out of range [{low}, {high})")]
    OutOfRange { index: i64, low: i64, high: i64 },

    #[error("illegal argument: {reason}")]
    IllegalArgument { reason: String },

    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: u32 },

    #[error("parse error: {reason}")]
    ParseError { reason: String },

    #[error("cannot take min/max of an empty set")]
    EmptySet,

    #[error("value has bits set beyond position 63")]
    Overflow,

    #[error("illegal state: {reason}")]
    IllegalState { reason: String },
}

pub type Result<T> = std::result::Result<T, HexError>;
