//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ValueSet] used for storing
//! group assignments and cell candidates.

use std::ops::{BitOr, BitOrAssign, Sub, SubAssign};

/// A set of cell values that is implemented as a bit mask. Since the grid
/// size is capped by [MAX_GRID_SIZE](crate::MAX_GRID_SIZE), all possible
/// values of a cell fit into a single `u64` word, which makes cloning and
/// snapshotting this set trivial. Value `v` is represented by bit `v` of the
/// mask.
///
/// The set does not know the size of the grid it is used with. Callers are
/// responsible for only inserting values in the range `[1, size]`; the
/// constructors and operators can never produce a value outside a range their
/// inputs were in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ValueSet {
    bits: u64
}

impl ValueSet {

    /// Creates a new, empty `ValueSet`.
    pub fn new() -> ValueSet {
        ValueSet {
            bits: 0
        }
    }

    /// Creates a new `ValueSet` that contains every value from 1 to `max`
    /// (both inclusive). For `max` of 0, the result is empty.
    pub fn full(max: usize) -> ValueSet {
        ValueSet {
            bits: ((1u64 << max) - 1) << 1
        }
    }

    /// Indicates whether this set contains the given value.
    pub fn contains(&self, value: usize) -> bool {
        value < 64 && self.bits & (1u64 << value) != 0
    }

    /// Inserts the given value into this set, such that [ValueSet::contains]
    /// returns `true` for it afterwards. Returns `true` if the set has
    /// changed, i.e. the value was not present before, and `false` otherwise.
    pub fn insert(&mut self, value: usize) -> bool {
        let mask = 1u64 << value;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        changed
    }

    /// Removes the given value from this set, such that [ValueSet::contains]
    /// returns `false` for it afterwards. Returns `true` if the set has
    /// changed, i.e. the value was present before, and `false` otherwise.
    pub fn remove(&mut self, value: usize) -> bool {
        let mask = 1u64 << value;
        let changed = self.bits & mask != 0;
        self.bits &= !mask;
        changed
    }

    /// Returns the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no values.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the values contained in this set in
    /// ascending order.
    pub fn iter(&self) -> ValueSetIter {
        ValueSetIter {
            bits: self.bits
        }
    }
}

/// An iterator over the values of a [ValueSet], in ascending order.
pub struct ValueSetIter {
    bits: u64
}

impl Iterator for ValueSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let value = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(value)
        }
    }
}

impl BitOr for ValueSet {
    type Output = ValueSet;

    /// Computes the union of the two sets.
    fn bitor(self, rhs: ValueSet) -> ValueSet {
        ValueSet {
            bits: self.bits | rhs.bits
        }
    }
}

impl BitOrAssign for ValueSet {

    /// Computes the union of the two sets and stores it in this set.
    fn bitor_assign(&mut self, rhs: ValueSet) {
        self.bits |= rhs.bits;
    }
}

impl Sub for ValueSet {
    type Output = ValueSet;

    /// Computes the difference of the two sets, i.e. removes all values in
    /// `rhs` from this set.
    fn sub(self, rhs: ValueSet) -> ValueSet {
        ValueSet {
            bits: self.bits & !rhs.bits
        }
    }
}

impl SubAssign for ValueSet {

    /// Computes the difference of the two sets and stores it in this set.
    fn sub_assign(&mut self, rhs: ValueSet) {
        self.bits &= !rhs.bits;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = ValueSet::new();

        assert!(set.is_empty());
        assert_eq!(0, set.len());
        assert!(!set.contains(1));
    }

    #[test]
    fn full_set_contains_range() {
        let set = ValueSet::full(9);

        assert_eq!(9, set.len());
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(0));
        assert!(!set.contains(10));
    }

    #[test]
    fn full_set_of_zero_is_empty() {
        assert!(ValueSet::full(0).is_empty());
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = ValueSet::new();

        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert!(set.contains(4));
        assert_eq!(1, set.len());

        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_ascending() {
        let mut set = ValueSet::new();
        set.insert(7);
        set.insert(2);
        set.insert(16);

        let values: Vec<usize> = set.iter().collect();

        assert_eq!(vec![2, 7, 16], values);
    }

    #[test]
    fn union_and_difference() {
        let mut low = ValueSet::new();
        low.insert(1);
        low.insert(2);
        let mut high = ValueSet::new();
        high.insert(2);
        high.insert(3);

        let union = low | high;
        let difference = ValueSet::full(4) - union;

        assert_eq!(vec![1, 2, 3], union.iter().collect::<Vec<_>>());
        assert_eq!(vec![4], difference.iter().collect::<Vec<_>>());

        low |= high;
        assert_eq!(union, low);

        low -= high;
        assert_eq!(vec![1], low.iter().collect::<Vec<_>>());
    }

    #[test]
    fn max_grid_size_fits() {
        let set = ValueSet::full(crate::MAX_GRID_SIZE);

        assert_eq!(crate::MAX_GRID_SIZE, set.len());
        assert!(set.contains(crate::MAX_GRID_SIZE));
    }
}
