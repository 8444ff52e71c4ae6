use crate::error::{InvalidArgument, Result};
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

/// Index to the left of `index`, wrapping from the first card to the last.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn neighbor_left(size: usize, index: usize) -> usize {
    assert!(size > 0, "neighbor_left over an empty index space");
    match (size, index) {
        (1, _) => index,
        (_, 0) => size - 1,
        _ => index - 1,
    }
}

/// Index to the right of `index`, wrapping from the last card to the first.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn neighbor_right(size: usize, index: usize) -> usize {
    assert!(size > 0, "neighbor_right over an empty index space");
    if size == 1 {
        index
    } else if index == size - 1 {
        0
    } else {
        index + 1
    }
}

/// The five positions of the visible neighbourhood, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum Slot {
    LeftMost,
    Left,
    Active,
    Right,
    RightMost,
}

impl Slot {
    /// Signed distance from the active card, in cards.
    pub fn step(&self) -> i32 {
        match self {
            Self::LeftMost => -2,
            Self::Left => -1,
            Self::Active => 0,
            Self::Right => 1,
            Self::RightMost => 2,
        }
    }

    // Collapsed windows (fewer than five cards) resolve an index to the first
    // slot that holds it in this order.
    const PRECEDENCE: [Slot; 5] = [
        Self::Active,
        Self::Left,
        Self::LeftMost,
        Self::Right,
        Self::RightMost,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexWindow {
    size: usize,
    active: usize,
    left: usize,
    left_most: usize,
    right: usize,
    right_most: usize,
}

impl IndexWindow {
    pub fn new(size: usize, active: usize) -> Result<Self> {
        if size == 0 {
            return Err(InvalidArgument::EmptyCarousel);
        }
        if active >= size {
            return Err(InvalidArgument::IndexOutOfRange {
                index: active,
                size,
            });
        }

        Ok(Self::build(size, active))
    }

    // Callers guarantee `active < size`.
    fn build(size: usize, active: usize) -> Self {
        let left = neighbor_left(size, active);
        let right = neighbor_right(size, active);

        Self {
            size,
            active,
            left,
            left_most: neighbor_left(size, left),
            right,
            right_most: neighbor_right(size, right),
        }
    }

    pub fn with_active(&self, active: usize) -> Result<Self> {
        Self::new(self.size, active)
    }

    /// The window with the left neighbour in front.
    pub fn shift_left(&self) -> Self {
        Self::build(self.size, self.left)
    }

    /// The window with the right neighbour in front.
    pub fn shift_right(&self) -> Self {
        Self::build(self.size, self.right)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn left_most(&self) -> usize {
        self.left_most
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn right_most(&self) -> usize {
        self.right_most
    }

    pub fn index_at(&self, slot: Slot) -> usize {
        match slot {
            Slot::LeftMost => self.left_most,
            Slot::Left => self.left,
            Slot::Active => self.active,
            Slot::Right => self.right,
            Slot::RightMost => self.right_most,
        }
    }

    /// Indices of the window, left to right. Repeats when `size < 5`.
    pub fn slots(&self) -> [usize; 5] {
        [
            self.left_most,
            self.left,
            self.active,
            self.right,
            self.right_most,
        ]
    }

    pub fn slot_of(&self, index: usize) -> Option<Slot> {
        Slot::PRECEDENCE
            .into_iter()
            .find(|&slot| self.index_at(slot) == index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slot_of(index).is_some()
    }

    /// Space separated window indices, left to right.
    pub fn label(&self) -> String {
        Slot::iter()
            .map(|slot| self.index_at(slot).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
