//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE, SUIT_SIZE, Suit};
use crate::hand::Hand;
use crate::options::{DealMode, GameOptions};
use crate::table::{RunState, Table};

mod ai;
pub mod state;
mod turn;

pub use state::Player;

/// A Sevens game engine that manages the deal, table runs, and turn flow.
///
/// The game owns the two hands, the table, and the turn state. All state
/// sits behind mutexes, so each operation is a single exclusive critical
/// section; two callers can never interleave "read state, decide, mutate".
/// Use [`GameOptions`] to configure the deal mode and the first player.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The two hands, indexed by [`Player::index`].
    pub hands: Mutex<[Hand; 2]>,
    /// The table runs.
    pub table: Mutex<Table>,
    /// The party whose turn it is.
    current: Mutex<Player>,
    /// The winning party, once a hand first empties.
    winner: Mutex<Option<Player>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and deals the first hands.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use svrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let game = Self {
            options,
            hands: Mutex::new([Hand::empty(); 2]),
            table: Mutex::new(Table::new()),
            current: Mutex::new(options.first_player),
            winner: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        game.deal();
        game
    }

    /// Starts a new game: deals two 26-card hands, resets every run to
    /// unopened, and gives the turn to the configured first player.
    ///
    /// Always succeeds; fully replaces any prior game state.
    pub fn deal(&self) {
        let hands = {
            let mut rng = self.rng.lock();
            Self::deal_hands(self.options.deal, &mut rng)
        };

        *self.hands.lock() = hands;
        *self.table.lock() = Table::new();
        *self.current.lock() = self.options.first_player;
        *self.winner.lock() = None;
    }

    /// Splits the full deck into two disjoint 26-card hands.
    fn deal_hands(mode: DealMode, rng: &mut ChaCha8Rng) -> [Hand; 2] {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 0..SUIT_SIZE {
                deck.push(Card::new(suit, rank));
            }
        }

        let mut hands = [Hand::empty(); 2];
        match mode {
            DealMode::Shuffled => {
                deck.shuffle(rng);
                for (i, card) in deck.into_iter().enumerate() {
                    hands[usize::from(i >= DECK_SIZE / 2)].insert(card);
                }
            }
            DealMode::Alternating => {
                for (i, card) in deck.into_iter().enumerate() {
                    hands[i % 2].insert(card);
                }
            }
        }
        hands
    }

    /// Returns whether the card is in the given party's hand.
    #[must_use]
    pub fn is_card_on_hand(&self, player: Player, card: Card) -> bool {
        self.hands.lock()[player.index()].contains(card)
    }

    /// Returns the number of cards in the given party's hand.
    #[must_use]
    pub fn cards_remaining(&self, player: Player) -> usize {
        self.hands.lock()[player.index()].len()
    }

    /// Returns a copy of the given party's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> Hand {
        self.hands.lock()[player.index()]
    }

    /// Returns the run state for the given suit.
    #[must_use]
    pub fn run(&self, suit: Suit) -> RunState {
        self.table.lock().run(suit)
    }

    /// Returns the party whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        *self.current.lock()
    }

    /// Returns the winning party, or `None` while the game is live.
    ///
    /// The winner is the party whose hand first became empty; once set it
    /// never changes until the next [`deal`](Self::deal).
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        *self.winner.lock()
    }

    /// Returns whether the party opposite the current player still holds
    /// cards.
    #[must_use]
    pub fn opponent_has_remaining_cards(&self) -> bool {
        let opponent = self.current.lock().opponent();
        !self.hands.lock()[opponent.index()].is_empty()
    }
}
