use crate::card::Card;
use crate::error::MoveError;

use super::Game;

impl Game {
    /// Returns whether the current player may play the card right now.
    ///
    /// True iff the game is live, the card is in the current player's hand,
    /// and it opens or extends its suit's run. Pure query, no mutation.
    #[must_use]
    pub fn is_card_valid_to_play(&self, card: Card) -> bool {
        if self.winner.lock().is_some() {
            return false;
        }

        let current = *self.current.lock();
        let held = self.hands.lock()[current.index()].contains(card);
        held && self.table.lock().is_valid_extension(card)
    }

    /// Returns whether the current player has at least one legal move.
    #[must_use]
    pub fn player_has_available_moves(&self) -> bool {
        if self.winner.lock().is_some() {
            return false;
        }

        let current = *self.current.lock();
        let hand = self.hands.lock()[current.index()];
        let table = *self.table.lock();

        hand.cards()
            .into_iter()
            .any(|card| table.is_valid_extension(card))
    }

    /// Plays the card for the current player.
    ///
    /// The validity predicate is re-checked inside the critical section, so
    /// a stale or buggy caller gets an error instead of corrupted state. The
    /// turn lock is held for the whole operation, so a concurrent
    /// [`switch_players`](Self::switch_players) cannot land between
    /// validation and commit. On success the card moves from the acting hand
    /// to the table, and if that hand just became empty the acting party is
    /// recorded as the winner.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the card is not held by the
    /// current player, does not open or extend its suit's run, or the game
    /// is already over.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn apply_move(&self, card: Card) -> Result<(), MoveError> {
        let current = self.current.lock();
        let mut winner = self.winner.lock();
        let mut hands = self.hands.lock();
        let mut table = self.table.lock();

        if winner.is_some() {
            return Err(MoveError::IllegalMove);
        }

        let hand = &mut hands[current.index()];
        if !hand.contains(card) {
            return Err(MoveError::IllegalMove);
        }

        table.apply(card)?;
        hand.remove(card);

        if hand.is_empty() {
            *winner = Some(*current);
        }

        Ok(())
    }

    /// Gives the turn to the other party.
    ///
    /// Called once per turn whether or not a move was played, so a party
    /// with no legal move passes and only loses that turn. Always succeeds.
    pub fn switch_players(&self) {
        let mut current = self.current.lock();
        *current = current.opponent();
    }
}
