//! Hand representation.

use alloc::vec::Vec;

use crate::card::{Card, SUIT_COUNT, SUIT_SIZE, Suit};

/// A party's hand, stored as one rank bitmask per suit.
///
/// The guarantee a hand provides is membership, not draw order: a card is
/// either held or not, and is removed exactly once when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    /// One bit per rank, per suit, in table order.
    masks: [u16; SUIT_COUNT],
}

/// Bit for a rank, or 0 for out-of-range ranks so they are never held.
const fn bit(rank: u8) -> u16 {
    if rank < SUIT_SIZE { 1 << rank } else { 0 }
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            masks: [0; SUIT_COUNT],
        }
    }

    /// Returns whether the card is in the hand.
    #[must_use]
    pub const fn contains(&self, card: Card) -> bool {
        self.masks[card.suit.index()] & bit(card.rank) != 0
    }

    /// Adds a card to the hand.
    pub const fn insert(&mut self, card: Card) {
        self.masks[card.suit.index()] |= bit(card.rank);
    }

    /// Removes a card from the hand.
    ///
    /// Returns whether the card was held.
    pub const fn remove(&mut self, card: Card) -> bool {
        let held = self.contains(card);
        self.masks[card.suit.index()] &= !bit(card.rank);
        held
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub const fn len(&self) -> usize {
        let mut total = 0u32;
        let mut suit = 0;
        while suit < SUIT_COUNT {
            total += self.masks[suit].count_ones();
            suit += 1;
        }
        total as usize
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the held cards, in ascending suit then rank order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.len());
        for suit in Suit::ALL {
            for rank in 0..SUIT_SIZE {
                let card = Card::new(suit, rank);
                if self.contains(card) {
                    cards.push(card);
                }
            }
        }
        cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::empty();
        for card in iter {
            hand.insert(card);
        }
        hand
    }
}
