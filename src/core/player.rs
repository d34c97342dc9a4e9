//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A match always has exactly two seats: the human at the keyboard and the
//! scripted computer opponent.
//!
//! ## Seats
//!
//! Per-seat storage with indexing by `Seat` and a split borrow that hands
//! out the acting side and its opponent at the same time.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Human-controlled participant. Takes the first turn.
    Human,
    /// Scripted opponent.
    Computer,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Storage index (0 for human, 1 for computer).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "PLAYER"),
            Seat::Computer => write!(f, "COMPUTER"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use rock_tcg::core::{Seat, Seats};
///
/// let mut prizes: Seats<u32> = Seats::new(|_| 6);
/// prizes[Seat::Computer] -= 1;
///
/// assert_eq!(prizes[Seat::Human], 6);
/// assert_eq!(prizes[Seat::Computer], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; 2],
}

impl<T> Seats<T> {
    /// Create with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Human), factory(Seat::Computer)],
        }
    }

    /// Build from explicit human and computer values.
    pub fn from_pair(human: T, computer: T) -> Self {
        Self {
            data: [human, computer],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Borrow `seat` and its opponent mutably at once.
    pub fn split_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [human, computer] = &mut self.data;
        match seat {
            Seat::Human => (human, computer),
            Seat::Computer => (computer, human),
        }
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
