use thiserror::Error;

/// Errors raised by board input validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid cell index: {0} (expected 0-8)")]
    InvalidCell(usize),

    #[error("Invalid player index: {0} (expected 0 or 1)")]
    InvalidPlayer(u8),

    #[error("Invalid board encoding: {0:?}")]
    InvalidEncoding(String),

    #[error("Invalid move index: {0} (expected 0-80)")]
    InvalidMove(usize),

    #[error("Invalid board masks: {0:#011b} / {1:#011b} (bits above 8 or overlap)")]
    InvalidMasks(u16, u16),

    #[error("Cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("Local board {0} is already decided")]
    BoardDecided(usize),
}

/// Convenience Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised when a player is asked to move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::InvalidMove(81).to_string(),
            "Invalid move index: 81 (expected 0-80)"
        );
        assert_eq!(
            BoardError::InvalidEncoding("XO".into()).to_string(),
            "Invalid board encoding: \"XO\""
        );
        assert_eq!(PlayError::NoLegalMoves.to_string(), "No legal moves available");
    }

    #[test]
    fn test_play_error_from_board_error() {
        let err: PlayError = BoardError::CellOccupied(3).into();
        assert_eq!(err, PlayError::Board(BoardError::CellOccupied(3)));
        assert_eq!(err.to_string(), "Cell 3 is already occupied");
    }
}
