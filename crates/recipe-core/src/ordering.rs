//! Ordered Sub-Items
//!
//! Steps and ingredients carry an explicit `sort_number`. Drag-and-drop
//! reordering moves one element to a drop slot and renumbers from 1.

use crate::domain::{Entity, Ingredient, Step};

/// Items ordered by an explicit integer key
pub trait Ordered: Entity {
    fn sort_number(&self) -> i64;
    fn set_sort_number(&mut self, sort_number: i64);
}

impl Ordered for Step {
    fn sort_number(&self) -> i64 {
        self.sort_number
    }

    fn set_sort_number(&mut self, sort_number: i64) {
        self.sort_number = sort_number;
    }
}

impl Ordered for Ingredient {
    fn sort_number(&self) -> i64 {
        self.sort_number
    }

    fn set_sort_number(&mut self, sort_number: i64) {
        self.sort_number = sort_number;
    }
}

/// Move `dragged` to drop slot `slot` and renumber the list.
///
/// Slot `n` is the gap before the item currently at index `n`; slot `len` is
/// the end of the list. Returns false when `dragged` is not in the list.
pub fn reorder<T: Ordered>(items: &mut Vec<T>, dragged: T::Id, slot: usize) -> bool {
    let Some(from) = items.iter().position(|item| item.id() == dragged) else {
        return false;
    };

    let item = items.remove(from);
    let mut to = slot.min(items.len() + 1);
    if to > from {
        to -= 1;
    }
    items.insert(to.min(items.len()), item);

    renumber(items);
    true
}

/// Assign sequential sort numbers (1, 2, 3, ...) in current order
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_sort_number(index as i64 + 1);
    }
}

/// `(id, sort_number)` pairs for persisting the current order
pub fn sort_order<T: Ordered>(items: &[T]) -> Vec<(T::Id, i64)> {
    items.iter().map(|item| (item.id(), item.sort_number())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_step(id: i64, sort_number: i64) -> Step {
        Step {
            id,
            description: format!("Step {}", id),
            sort_number,
            is_active: true,
        }
    }

    fn ids(steps: &[Step]) -> Vec<i64> {
        steps.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_move_down() {
        let mut steps = vec![make_step(1, 1), make_step(2, 2), make_step(3, 3)];
        assert!(reorder(&mut steps, 1, 3));
        assert_eq!(ids(&steps), vec![2, 3, 1]);
        assert_eq!(sort_order(&steps), vec![(2, 1), (3, 2), (1, 3)]);
    }

    #[test]
    fn test_move_up() {
        let mut steps = vec![make_step(1, 1), make_step(2, 2), make_step(3, 3)];
        assert!(reorder(&mut steps, 3, 0));
        assert_eq!(ids(&steps), vec![3, 1, 2]);
    }

    #[test]
    fn test_drop_next_to_self_keeps_order() {
        let mut steps = vec![make_step(1, 5), make_step(2, 9)];
        assert!(reorder(&mut steps, 1, 1));
        assert_eq!(ids(&steps), vec![1, 2]);
        // Still renumbered
        assert_eq!(steps[1].sort_number, 2);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut steps = vec![make_step(1, 1)];
        assert!(!reorder(&mut steps, 42, 0));
        assert_eq!(ids(&steps), vec![1]);
    }

    #[test]
    fn test_slot_past_end_clamps() {
        let mut steps = vec![make_step(1, 1), make_step(2, 2)];
        assert!(reorder(&mut steps, 1, 99));
        assert_eq!(ids(&steps), vec![2, 1]);
    }
}
