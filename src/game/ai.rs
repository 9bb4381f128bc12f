//! Best-move search for the automated party.

use crate::card::Card;
use crate::hand::Hand;
use crate::table::{RunState, Table};

use super::Game;

/// A scored candidate move.
struct Candidate {
    card: Card,
    /// Legal moves the acting hand would still have after playing the card,
    /// assuming no intervening table changes.
    mobility: usize,
    /// Whether the card opens a previously unopened suit.
    opens_suit: bool,
}

/// Counts the hand's legal moves against the table.
fn mobility(hand: &Hand, table: &Table) -> usize {
    hand.cards()
        .into_iter()
        .filter(|&card| table.is_valid_extension(card))
        .count()
}

/// Picks the best legal move for the hand against the table.
///
/// A pure function of the acting hand and the public table; the opposing
/// hand is never consulted. Candidates are ranked by mobility after the
/// move, then by whether they open a new suit, and the ascending suit then
/// rank enumeration breaks the remaining ties, so the choice is a total
/// order and identical states always produce the identical move.
fn best_move_for(hand: &Hand, table: &Table) -> Option<Card> {
    let mut best: Option<Candidate> = None;

    for card in hand.cards() {
        if !table.is_valid_extension(card) {
            continue;
        }

        let mut next_table = *table;
        if next_table.apply(card).is_err() {
            continue;
        }
        let mut next_hand = *hand;
        next_hand.remove(card);

        let candidate = Candidate {
            card,
            mobility: mobility(&next_hand, &next_table),
            opens_suit: table.run(card.suit) == RunState::Unopened,
        };

        let better = best.as_ref().is_none_or(|b| {
            candidate.mobility > b.mobility
                || (candidate.mobility == b.mobility && candidate.opens_suit && !b.opens_suit)
        });
        if better {
            best = Some(candidate);
        }
    }

    best.map(|candidate| candidate.card)
}

impl Game {
    /// Picks the best legal move for the current player, or `None` if the
    /// player has no legal move (the turn must still be advanced via
    /// [`switch_players`](Self::switch_players)).
    ///
    /// Intended for the automated party's turn. The search reads only the
    /// acting hand and the table, never the opposing hand, and is
    /// deterministic: the same state always yields the same move.
    #[must_use]
    pub fn best_move(&self) -> Option<Card> {
        if self.winner.lock().is_some() {
            return None;
        }

        let current = *self.current.lock();
        let hand = self.hands.lock()[current.index()];
        let table = *self.table.lock();

        best_move_for(&hand, &table)
    }
}
