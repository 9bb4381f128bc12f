//! Per-suit table run tracking.

use crate::card::{CENTER_RANK, Card, SUIT_COUNT, SUIT_SIZE, Suit};
use crate::error::MoveError;

/// State of one suit's run on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// No card of the suit has been played yet.
    #[default]
    Unopened,
    /// A contiguous span of ranks is on the table.
    Open {
        /// Lowest rank played. Only ever decreases, one step at a time.
        low: u8,
        /// Highest rank played. Only ever increases, one step at a time.
        high: u8,
    },
}

impl RunState {
    /// Returns whether a card of the given rank would open or extend the run.
    ///
    /// An unopened run accepts only the center rank; an open run accepts the
    /// rank one below its low boundary or one above its high boundary.
    #[must_use]
    pub const fn is_valid_extension(self, rank: u8) -> bool {
        if rank >= SUIT_SIZE {
            return false;
        }
        match self {
            Self::Unopened => rank == CENTER_RANK,
            Self::Open { low, high } => (low > 0 && rank == low - 1) || rank == high + 1,
        }
    }

    /// Returns whether the given rank has been played to this run.
    #[must_use]
    pub const fn contains(self, rank: u8) -> bool {
        match self {
            Self::Unopened => false,
            Self::Open { low, high } => low <= rank && rank <= high,
        }
    }

    /// Returns the number of cards in the run.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            Self::Unopened => 0,
            Self::Open { low, high } => (high - low) as usize + 1,
        }
    }
}

/// The table: one run per suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Table {
    /// Run state per suit, in table order.
    runs: [RunState; SUIT_COUNT],
}

impl Table {
    /// Creates a table with every run unopened.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runs: [RunState::Unopened; SUIT_COUNT],
        }
    }

    /// Returns the run state for the given suit.
    #[must_use]
    pub const fn run(&self, suit: Suit) -> RunState {
        self.runs[suit.index()]
    }

    /// Returns whether the card would open or extend its suit's run.
    #[must_use]
    pub const fn is_valid_extension(&self, card: Card) -> bool {
        self.runs[card.suit.index()].is_valid_extension(card.rank)
    }

    /// Plays the card to its suit's run.
    ///
    /// The extension rule is re-checked before mutating, so an invalid card
    /// leaves the table untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the card does not open or
    /// extend its suit's run.
    pub const fn apply(&mut self, card: Card) -> Result<(), MoveError> {
        if !self.is_valid_extension(card) {
            return Err(MoveError::IllegalMove);
        }

        let run = &mut self.runs[card.suit.index()];
        *run = match *run {
            RunState::Unopened => RunState::Open {
                low: CENTER_RANK,
                high: CENTER_RANK,
            },
            RunState::Open { low, high } => {
                if card.rank < low {
                    RunState::Open {
                        low: card.rank,
                        high,
                    }
                } else {
                    RunState::Open {
                        low,
                        high: card.rank,
                    }
                }
            }
        };

        Ok(())
    }

    /// Returns whether the card has been played to the table.
    #[must_use]
    pub const fn contains(&self, card: Card) -> bool {
        self.runs[card.suit.index()].contains(card.rank)
    }

    /// Returns the total number of cards laid out on the table.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        let mut total = 0;
        let mut suit = 0;
        while suit < SUIT_COUNT {
            total += self.runs[suit].card_count();
            suit += 1;
        }
        total
    }
}
