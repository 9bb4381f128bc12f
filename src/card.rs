//! Card types and deck constants.

/// Card suit, in fixed table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (index 0).
    Clubs,
    /// Diamonds (index 1).
    Diamonds,
    /// Hearts (index 2).
    Hearts,
    /// Spades (index 3).
    Spades,
}

impl Suit {
    /// All suits in table order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the table index of the suit.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Ace, 6 = Seven, 12 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..13
    /// are accepted but are never held in a hand and never extend a run.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

/// Number of suits in the deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const SUIT_SIZE: u8 = 13;

/// The rank at which every suit's run opens (the "7").
pub const CENTER_RANK: u8 = 6;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = SUIT_COUNT * SUIT_SIZE as usize;
