//! Grid slot bindings and matched statuses.

use alloc::vec::Vec;

use crate::card::{Card, PAIR_COUNT};
use crate::error::LayoutError;

/// A fixed grid slot, bound to exactly one target card.
///
/// The matched status is one-way: once set it stays set until the game is
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    target: Card,
    matched: bool,
}

impl GridSlot {
    const fn new(target: Card) -> Self {
        Self {
            target,
            matched: false,
        }
    }

    /// Returns the card this slot must be matched with.
    #[must_use]
    pub const fn target(&self) -> Card {
        self.target
    }

    /// Returns whether this slot has been matched.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }
}

/// The fixed grid of target slots.
///
/// Slot-to-target bindings are supplied externally (they mirror whatever the
/// presentation layer renders) and must form a valid assignment: exactly one
/// slot per identifier in 1..=[`PAIR_COUNT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    slots: Vec<GridSlot>,
}

impl Grid {
    /// Builds a grid from slot-to-target bindings.
    ///
    /// `targets[i]` is the identifier slot `i` must be matched with.
    ///
    /// # Errors
    ///
    /// Returns an error if the binding list is not a permutation of
    /// 1..=[`PAIR_COUNT`].
    pub fn from_targets(targets: &[u8]) -> Result<Self, LayoutError> {
        if targets.len() != usize::from(PAIR_COUNT) {
            return Err(LayoutError::WrongSlotCount);
        }

        let mut seen = [false; PAIR_COUNT as usize];
        for &id in targets {
            if id == 0 || id > PAIR_COUNT {
                return Err(LayoutError::TargetOutOfRange);
            }
            let index = usize::from(id - 1);
            if seen[index] {
                return Err(LayoutError::DuplicateTarget);
            }
            seen[index] = true;
        }

        Ok(Self {
            slots: targets
                .iter()
                .map(|&id| GridSlot::new(Card::new(id)))
                .collect(),
        })
    }

    /// Builds the identity binding: slot `i` targets card `i + 1`.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            slots: (1..=PAIR_COUNT)
                .map(|id| GridSlot::new(Card::new(id)))
                .collect(),
        }
    }

    /// Returns all slots in binding order.
    #[must_use]
    pub fn slots(&self) -> &[GridSlot] {
        &self.slots
    }

    /// Returns the slot at `index`, or `None` if out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<GridSlot> {
        self.slots.get(index).copied()
    }

    /// Returns the number of matched slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.matched).count()
    }

    pub(crate) fn mark_matched(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.matched = true;
        }
    }

    pub(crate) fn clear_matches(&mut self) {
        for slot in &mut self.slots {
            slot.matched = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_grid_binds_every_identifier_once() {
        let grid = Grid::sequential();

        assert_eq!(grid.slots().len(), usize::from(PAIR_COUNT));
        for (index, slot) in grid.slots().iter().enumerate() {
            assert_eq!(usize::from(slot.target().id), index + 1);
            assert!(!slot.is_matched());
        }
    }

    #[test]
    fn from_targets_accepts_any_permutation() {
        let grid = Grid::from_targets(&[3, 1, 4, 2, 8, 6, 5, 7]).unwrap();

        assert_eq!(grid.slot(0).map(|slot| slot.target()), Some(Card::new(3)));
        assert_eq!(grid.slot(7).map(|slot| slot.target()), Some(Card::new(7)));
        assert_eq!(grid.slot(8), None);
    }

    #[test]
    fn from_targets_rejects_bad_bindings() {
        assert_eq!(
            Grid::from_targets(&[1, 2, 3]).unwrap_err(),
            LayoutError::WrongSlotCount
        );
        assert_eq!(
            Grid::from_targets(&[1, 2, 3, 4, 5, 6, 7, 9]).unwrap_err(),
            LayoutError::TargetOutOfRange
        );
        assert_eq!(
            Grid::from_targets(&[0, 2, 3, 4, 5, 6, 7, 8]).unwrap_err(),
            LayoutError::TargetOutOfRange
        );
        assert_eq!(
            Grid::from_targets(&[1, 1, 3, 4, 5, 6, 7, 8]).unwrap_err(),
            LayoutError::DuplicateTarget
        );
    }

    #[test]
    fn matched_flags_are_per_slot_and_resettable() {
        let mut grid = Grid::sequential();

        grid.mark_matched(2);
        grid.mark_matched(2);
        grid.mark_matched(42);

        assert_eq!(grid.matched_count(), 1);
        assert!(grid.slot(2).is_some_and(|slot| slot.is_matched()));

        grid.clear_matches();
        assert_eq!(grid.matched_count(), 0);
    }
}
