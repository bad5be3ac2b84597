use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a dictionary file
    #[error("Dictionary \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Character is not a letter `A`..`Z` (case insensitive)
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Word contains something other than the letters `A`..`Z`
    #[error("Invalid word \"{0}\"")]
    InvalidWord(String),

    /// Rack text contains something other than letters or blanks
    #[error("Invalid rack tile '{0}'")]
    InvalidRackTile(char),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {found} (expect {expected})")]
    InvalidRowCount { expected: usize, found: usize },

    /// Parsing a row on the board needs exactly `width` cells
    #[error("Invalid row \"{row}\": length {found}, expect {expected}")]
    InvalidRowLength {
        row: String,
        expected: usize,
        found: usize,
    },

    /// Attempt to change a cell outside the board
    #[error("Cell x={x}, y={y} is outside the board")]
    OutOfBounds { x: usize, y: usize },

    /// The transfer text is not valid JSON for a board
    #[error("Board transfer could not be decoded: {0}")]
    TransferDecodeError(#[from] serde_json::Error),

    /// Columns in a board transfer differ in length
    #[error("Board transfer column {column} has {found} cells, expect {expected}")]
    InconsistentBoard {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// Letter value table has a key that is not a single letter
    #[error("Invalid letter value key \"{0}\"")]
    InvalidValueKey(String),

    /// The search was cancelled at a checkpoint
    #[error("Search cancelled before word {index}")]
    Cancelled { index: usize },

    /// The search ran past its deadline
    #[error("Search timed out before word {index}")]
    TimedOut { index: usize },

    /// No worker could complete a dictionary slice
    #[error("Slice start={start} count={count} failed: {reason}")]
    WorkerFailed {
        start: usize,
        count: usize,
        reason: String,
    },

    /// A coordinator needs at least one worker
    #[error("Coordinator has no workers")]
    NoWorkers,
}
