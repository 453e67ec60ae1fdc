//! Error types for the searchlab crate

use thiserror::Error;

/// Main error type for the searchlab crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square ({row}, {col}) is outside the 3x3 board")]
    SquareOutOfRange { row: usize, col: usize },

    #[error("invalid move: square ({row}, {col}) is already occupied")]
    SquareOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("utility is only defined for terminal states")]
    NotTerminal,

    #[error("it is not the {expected} player's turn")]
    WrongTurn { expected: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid grid: {message}")]
    InvalidGrid { message: String },

    #[error("position ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfGrid {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    #[error("invalid TSP instance: {message}")]
    InvalidInstance { message: String },

    #[error("unsupported TSPLIB {field} '{value}'")]
    UnsupportedTsplib { field: String, value: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
