//! Turn state types.

/// One of the two competing parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The automated party. Acts first by default.
    Computer,
    /// The human party.
    Human,
}

impl Player {
    /// Returns the other party.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Computer => Self::Human,
            Self::Human => Self::Computer,
        }
    }

    /// Returns the hand index of the party.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Computer => 0,
            Self::Human => 1,
        }
    }
}
