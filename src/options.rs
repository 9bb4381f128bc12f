//! Game configuration options.

use crate::game::Player;

/// How the deck is split between the two hands at the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealMode {
    /// Shuffle the deck with the seeded RNG, then split it in half.
    #[default]
    Shuffled,
    /// Deterministic split: cards alternate between the two hands in deck
    /// order, independent of the seed.
    Alternating,
}

/// Configuration options for a Sevens game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use svrs::{DealMode, GameOptions, Player};
///
/// let options = GameOptions::default()
///     .with_deal(DealMode::Alternating)
///     .with_first_player(Player::Human);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// How the deck is split at the deal.
    pub deal: DealMode,
    /// The party that acts first after the deal.
    pub first_player: Player,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deal: DealMode::Shuffled,
            first_player: Player::Computer,
        }
    }
}

impl GameOptions {
    /// Sets the deal mode.
    ///
    /// # Example
    ///
    /// ```
    /// use svrs::{DealMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_deal(DealMode::Alternating);
    /// assert_eq!(options.deal, DealMode::Alternating);
    /// ```
    #[must_use]
    pub const fn with_deal(mut self, deal: DealMode) -> Self {
        self.deal = deal;
        self
    }

    /// Sets the party that acts first.
    ///
    /// # Example
    ///
    /// ```
    /// use svrs::{GameOptions, Player};
    ///
    /// let options = GameOptions::default().with_first_player(Player::Human);
    /// assert_eq!(options.first_player, Player::Human);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}
