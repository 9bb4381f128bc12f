//! A Sevens ("domino") card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a full two-party game:
//! the deal, per-suit table runs growing outward from the center rank,
//! move validation, turn switching, win detection, and a deterministic
//! best-move search for the automated party.
//!
//! # Example
//!
//! ```no_run
//! use svrs::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod table;
mod sync;

// Re-export main types
pub use card::{CENTER_RANK, Card, DECK_SIZE, SUIT_COUNT, SUIT_SIZE, Suit};
pub use error::MoveError;
pub use game::{Game, Player};
pub use hand::Hand;
pub use options::{DealMode, GameOptions};
pub use table::{RunState, Table};
