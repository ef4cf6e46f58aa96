//! Circular position over a fixed-size collection.
//!
//! The testimonial stack keeps one of these in component state. Every card
//! asks for its offset from the active position and derives its pose from
//! that, so the cards fan out symmetrically around the active one.

use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircularSelector {
    len: usize,
    position: usize,
}

impl CircularSelector {
    /// A selector over `len` items starting at 0. `len == 0` is allowed but
    /// has no active item; every command on it is a no-op or an error.
    pub fn new(len: usize) -> Self {
        Self { len, position: 0 }
    }

    /// Builds a selector for `items`, rejecting an empty collection.
    pub fn for_items<T>(what: &'static str, items: &[T]) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyCollection(what));
        }
        Ok(Self::new(items.len()))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.position)
    }

    pub fn advance(&mut self, direction: Direction) {
        if self.is_empty() {
            return;
        }
        self.position = match direction {
            Direction::Next => (self.position + 1) % self.len,
            Direction::Previous => (self.position + self.len - 1) % self.len,
        };
    }

    /// Moves straight to `index`. Returns `Ok(false)` when `index` already is
    /// the active position.
    pub fn jump_to(&mut self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(SiteError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.position {
            return Ok(false);
        }
        self.position = index;
        Ok(true)
    }

    /// Signed circular distance of `index` from the active position, in
    /// `(-len/2, len/2]`. At exactly half way round the positive side wins.
    pub fn offset_of(&self, index: usize) -> Option<isize> {
        if index >= self.len {
            return None;
        }
        let n = self.len as isize;
        let mut d = index as isize - self.position as isize;
        if 2 * d > n {
            d -= n;
        } else if 2 * d <= -n {
            d += n;
        }
        Some(d)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.offset_of(index) == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(sel: &CircularSelector) -> Vec<isize> {
        (0..sel.len()).filter_map(|i| sel.offset_of(i)).collect()
    }

    #[test]
    fn test_advance_wraps_both_ends() {
        let mut sel = CircularSelector::new(3);
        sel.advance(Direction::Previous);
        assert_eq!(sel.active(), Some(2));
        sel.advance(Direction::Next);
        assert_eq!(sel.active(), Some(0));
    }

    #[test]
    fn test_position_stays_in_range() {
        for n in 1..=9 {
            let mut sel = CircularSelector::new(n);
            for step in 0..50 {
                let dir = if step % 3 == 0 {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                sel.advance(dir);
                let p = sel.active().unwrap();
                assert!(p < n, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn test_single_item_advance_is_noop() {
        let mut sel = CircularSelector::new(1);
        sel.advance(Direction::Next);
        assert_eq!(sel.active(), Some(0));
        sel.advance(Direction::Previous);
        assert_eq!(sel.active(), Some(0));
    }

    #[test]
    fn test_offsets_in_half_open_range_with_one_active() {
        for n in 1..=10usize {
            let lo = -(n.div_ceil(2) as isize);
            let hi = (n / 2) as isize;
            for p in 0..n {
                let mut sel = CircularSelector::new(n);
                sel.jump_to(p).unwrap();
                let offs = offsets(&sel);
                assert!(offs.iter().all(|&d| d > lo && d <= hi), "n={n} p={p} {offs:?}");
                assert_eq!(offs.iter().filter(|&&d| d == 0).count(), 1);
            }
        }
    }

    #[test]
    fn test_four_items_after_next() {
        let mut sel = CircularSelector::new(4);
        sel.advance(Direction::Next);
        assert_eq!(sel.active(), Some(1));
        assert_eq!(sel.offset_of(0), Some(-1));
        assert_eq!(sel.offset_of(2), Some(1));
        assert_eq!(sel.offset_of(3), Some(2));
    }

    #[test]
    fn test_even_tie_goes_positive() {
        let mut sel = CircularSelector::new(4);
        sel.jump_to(2).unwrap();
        assert_eq!(sel.offset_of(0), Some(2));
    }

    #[test]
    fn test_jump_then_offset_zero() {
        let mut sel = CircularSelector::new(5);
        for i in [3, 0, 4, 1] {
            assert!(sel.jump_to(i).unwrap());
            assert_eq!(sel.offset_of(i), Some(0));
            assert!(sel.is_active(i));
        }
    }

    #[test]
    fn test_jump_to_current_is_unchanged() {
        let mut sel = CircularSelector::new(4);
        sel.jump_to(2).unwrap();
        let before = sel;
        assert!(!sel.jump_to(2).unwrap());
        assert_eq!(sel, before);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut sel = CircularSelector::new(4);
        sel.jump_to(1).unwrap();
        let err = sel.jump_to(4).unwrap_err();
        assert!(matches!(err, SiteError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(sel.active(), Some(1));
    }

    #[test]
    fn test_empty_selector_has_no_active() {
        let mut sel = CircularSelector::new(0);
        assert_eq!(sel.active(), None);
        sel.advance(Direction::Next);
        sel.advance(Direction::Previous);
        assert_eq!(sel.active(), None);
        assert!(sel.jump_to(0).is_err());
        assert_eq!(sel.offset_of(0), None);
    }

    #[test]
    fn test_for_items_rejects_empty() {
        let none: [u8; 0] = [];
        assert!(matches!(
            CircularSelector::for_items("testimonials", &none),
            Err(SiteError::EmptyCollection("testimonials"))
        ));
        let sel = CircularSelector::for_items("testimonials", &[1, 2, 3]).unwrap();
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.active(), Some(0));
    }
}
