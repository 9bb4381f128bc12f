//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when applying a move.
///
/// A party having no legal move is not an error; the move search reports it
/// as `None` and the turn still advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The card is not held by the party to move, does not open or extend
    /// its suit's run, or the game is already over.
    #[error("illegal move")]
    IllegalMove,
}
