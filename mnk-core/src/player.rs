//! Player identities and the two-player roster

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player handle. Boards and searches compare players by id only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A registered player: handle plus display symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub symbol: char,
}

impl Player {
    pub const fn new(id: u8, symbol: char) -> Self {
        Self {
            id: PlayerId(id),
            symbol,
        }
    }
}

/// Ordered pair of opposing players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    pub fn new(first: Player, second: Player) -> Self {
        debug_assert_ne!(first.id, second.id, "roster players must be distinct");
        Self {
            players: [first, second],
        }
    }

    /// Players in registration order
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn first(&self) -> PlayerId {
        self.players[0].id
    }

    pub fn second(&self) -> PlayerId {
        self.players[1].id
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// The other player of the pair
    pub fn opponent(&self, id: PlayerId) -> PlayerId {
        debug_assert!(self.contains(id), "{} is not on the roster", id);
        if id == self.players[0].id {
            self.players[1].id
        } else {
            self.players[0].id
        }
    }

    /// Display symbol for a handle, `'?'` for strangers
    pub fn symbol(&self, id: PlayerId) -> char {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map_or('?', |p| p.symbol)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Player::new(1, 'O'), Player::new(2, 'X'))
    }
}
