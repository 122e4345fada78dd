use glview_core::types::Point;
use serde::Serialize;

/// A tracked touch as seen by the delegate.
///
/// `id` is the slot index, stable while the touch is bound and reused after it
/// is released. Locations are in design space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Touch {
    id: usize,
    location: Point,
    previous_location: Point,
    start_location: Point,
}

impl Touch {
    pub(crate) fn began(id: usize, location: Point) -> Self {
        Self {
            id,
            location,
            previous_location: location,
            start_location: location,
        }
    }

    pub(crate) fn moved_to(&mut self, location: Point) {
        self.previous_location = self.location;
        self.location = location;
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn previous_location(&self) -> Point {
        self.previous_location
    }

    pub fn start_location(&self) -> Point {
        self.start_location
    }

    /// Movement since the previous update.
    pub fn delta(&self) -> Point {
        self.location - self.previous_location
    }
}

/// Occupancy bitmask over at most 32 slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotMask {
    bits: u32,
    capacity: usize,
}

impl SlotMask {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!((1..=u32::BITS as usize).contains(&capacity));
        Self { bits: 0, capacity }
    }

    /// Claims the lowest clear slot, if any.
    pub(crate) fn acquire(&mut self) -> Option<usize> {
        let index = (!self.bits).trailing_zeros() as usize;
        if index >= self.capacity {
            return None;
        }
        self.bits |= 1 << index;
        Some(index)
    }

    pub(crate) fn release(&mut self, index: usize) {
        if index < self.capacity {
            self.bits &= !(1 << index);
        }
    }

    pub(crate) fn is_set(&self, index: usize) -> bool {
        index < self.capacity && self.bits & (1 << index) != 0
    }

    pub(crate) fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count() == self.capacity
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_touch_tracks_previous_and_start() {
        let mut touch = Touch::began(2, Point::new(10.0, 20.0));
        assert_eq!(touch.delta(), Point::ZERO);

        touch.moved_to(Point::new(15.0, 18.0));
        touch.moved_to(Point::new(16.0, 21.0));
        assert_eq!(touch.id(), 2);
        assert_eq!(touch.start_location(), Point::new(10.0, 20.0));
        assert_eq!(touch.previous_location(), Point::new(15.0, 18.0));
        assert_eq!(touch.delta(), Point::new(1.0, 3.0));
    }

    #[test]
    fn test_mask_allocates_lowest_clear_bit() {
        let mut mask = SlotMask::new(5);
        assert_eq!(mask.acquire(), Some(0));
        assert_eq!(mask.acquire(), Some(1));
        assert_eq!(mask.acquire(), Some(2));
        mask.release(1);
        assert!(!mask.is_set(1));
        assert_eq!(mask.acquire(), Some(1));
        assert_eq!(mask.count(), 3);
    }

    #[test]
    fn test_mask_respects_capacity() {
        let mut mask = SlotMask::new(2);
        assert_eq!(mask.acquire(), Some(0));
        assert_eq!(mask.acquire(), Some(1));
        assert!(mask.is_full());
        assert_eq!(mask.acquire(), None);
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_mask_full_width() {
        let mut mask = SlotMask::new(32);
        for expected in 0..32 {
            assert_eq!(mask.acquire(), Some(expected));
        }
        assert_eq!(mask.acquire(), None);
        mask.release(31);
        assert_eq!(mask.acquire(), Some(31));
    }

    #[test]
    fn test_touch_serializes_design_space_locations() {
        let touch = Touch::began(0, Point::new(50.0, 25.0));
        let json = serde_json::to_value(touch).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["location"]["x"], 50.0);
    }
}
