//! Fixed-capacity multi-touch tracking.
//!
//! Platform touch identifiers are opaque and reused freely. [`TouchRegistry`]
//! binds each live identifier to one of a small, fixed number of slots and
//! reports touches by slot index, so consumers see dense, stable ids for the
//! lifetime of a contact. Slots are handed out lowest index first.

mod slot;

pub use slot::Touch;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use glview_core::config::defaults::{DEFAULT_MAX_TOUCHES, MAX_TOUCH_CAPACITY};
use glview_core::types::Point;
use serde::Serialize;

use self::slot::SlotMask;
use super::delegate::{self, TouchDelegate, TouchPhase};
use crate::error::ViewError;
use crate::view::ViewTransform;

/// Counters for the conditions the registry recovers from silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TouchStats {
    /// Begins dropped because every slot was bound.
    pub dropped_capacity: u64,
    /// Move/end/cancel entries for identifiers that were not bound.
    pub skipped_unknown: u64,
    /// Begins for identifiers that were already bound.
    pub ignored_duplicates: u64,
}

pub struct TouchRegistry<I = i64> {
    slots: Vec<Option<Touch>>,
    mask: SlotMask,
    bindings: HashMap<I, usize>,
    delegate: Option<Box<dyn TouchDelegate>>,
    stats: TouchStats,
}

impl<I> fmt::Debug for TouchRegistry<I>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchRegistry")
            .field("capacity", &self.mask.capacity())
            .field("bindings", &self.bindings)
            .field("has_delegate", &self.delegate.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<I> Default for TouchRegistry<I>
where
    I: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> TouchRegistry<I>
where
    I: Eq + Hash + Clone + fmt::Debug,
{
    /// A registry with the default number of slots.
    pub fn new() -> Self {
        Self::build(DEFAULT_MAX_TOUCHES)
    }

    /// A registry tracking at most `max_touches` simultaneous contacts.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidTouchCapacity`] unless `1 <= max_touches <= 32`.
    pub fn with_capacity(max_touches: usize) -> Result<Self, ViewError> {
        if !(1..=MAX_TOUCH_CAPACITY).contains(&max_touches) {
            return Err(ViewError::InvalidTouchCapacity {
                requested: max_touches,
                max: MAX_TOUCH_CAPACITY,
            });
        }
        Ok(Self::build(max_touches))
    }

    fn build(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            mask: SlotMask::new(capacity),
            bindings: HashMap::with_capacity(capacity),
            delegate: None,
            stats: TouchStats::default(),
        }
    }

    /// Registers the batch receiver, replacing any previous one.
    pub fn set_touch_delegate(&mut self, delegate: Box<dyn TouchDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn capacity(&self) -> usize {
        self.mask.capacity()
    }

    pub fn active_count(&self) -> usize {
        self.mask.count()
    }

    pub fn is_tracking(&self, id: &I) -> bool {
        self.bindings.contains_key(id)
    }

    pub fn slot_of(&self, id: &I) -> Option<usize> {
        self.bindings.get(id).copied()
    }

    /// The touch currently bound to slot `index`.
    pub fn touch(&self, index: usize) -> Option<&Touch> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn stats(&self) -> TouchStats {
        self.stats
    }

    pub fn process_begin(&mut self, view: &ViewTransform, ids: &[I], xs: &[f64], ys: &[f64]) {
        let len = batch_len(TouchPhase::Began, ids, xs, ys);
        let mut batch = Vec::with_capacity(len);

        for ((id, &x), &y) in ids.iter().zip(xs).zip(ys).take(len) {
            if self.bindings.contains_key(id) {
                self.stats.ignored_duplicates += 1;
                tracing::trace!("Touch: Begin for already tracked ID: {:?}. Ignoring.", id);
                continue;
            }

            let Some(index) = self.mask.acquire() else {
                self.stats.dropped_capacity += 1;
                tracing::warn!(
                    "Touch: All {} slots in use, dropping begin for ID: {:?} (dropped so far: {}).",
                    self.mask.capacity(),
                    id,
                    self.stats.dropped_capacity
                );
                continue;
            };

            let touch = Touch::began(index, view.to_design_space(Point::new(x, y)));
            self.slots[index] = Some(touch);
            self.bindings.insert(id.clone(), index);
            tracing::debug!("Touch: Bound ID: {:?} to slot {} at {:?}", id, index, touch.location());
            batch.push(touch);
        }

        self.dispatch(TouchPhase::Began, batch);
    }

    pub fn process_move(&mut self, view: &ViewTransform, ids: &[I], xs: &[f64], ys: &[f64]) {
        let len = batch_len(TouchPhase::Moved, ids, xs, ys);
        let mut batch = Vec::with_capacity(len);

        for ((id, &x), &y) in ids.iter().zip(xs).zip(ys).take(len) {
            let Some(touch) = self.bound_touch_mut(id, TouchPhase::Moved) else {
                continue;
            };
            touch.moved_to(view.to_design_space(Point::new(x, y)));
            batch.push(*touch);
        }

        self.dispatch(TouchPhase::Moved, batch);
    }

    pub fn process_end(&mut self, view: &ViewTransform, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.process_release(TouchPhase::Ended, view, ids, xs, ys);
    }

    pub fn process_cancel(&mut self, view: &ViewTransform, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.process_release(TouchPhase::Cancelled, view, ids, xs, ys);
    }

    fn process_release(&mut self, phase: TouchPhase, view: &ViewTransform, ids: &[I], xs: &[f64], ys: &[f64]) {
        let len = batch_len(phase, ids, xs, ys);
        let mut batch = Vec::with_capacity(len);

        for ((id, &x), &y) in ids.iter().zip(xs).zip(ys).take(len) {
            let Some(touch) = self.bound_touch_mut(id, phase) else {
                continue;
            };
            touch.moved_to(view.to_design_space(Point::new(x, y)));
            batch.push(*touch);
            self.release(id);
        }

        self.dispatch(phase, batch);
    }

    /// Releases every bound slot and reports them as one cancelled batch,
    /// lowest slot first.
    pub fn cancel_all(&mut self) {
        let batch: Vec<Touch> = self.slots.iter_mut().filter_map(Option::take).collect();
        for touch in &batch {
            self.mask.release(touch.id());
        }
        self.bindings.clear();
        if !batch.is_empty() {
            tracing::debug!("Touch: Cancelling {} live touches.", batch.len());
        }
        self.dispatch(TouchPhase::Cancelled, batch);
    }

    pub fn touches_began<T>(&mut self, view: &ViewTransform, touches: T)
    where
        T: IntoIterator<Item = (I, Point)>,
    {
        let (ids, xs, ys) = split_native(touches);
        self.process_begin(view, &ids, &xs, &ys);
    }

    pub fn touches_moved<T>(&mut self, view: &ViewTransform, touches: T)
    where
        T: IntoIterator<Item = (I, Point)>,
    {
        let (ids, xs, ys) = split_native(touches);
        self.process_move(view, &ids, &xs, &ys);
    }

    pub fn touches_ended<T>(&mut self, view: &ViewTransform, touches: T)
    where
        T: IntoIterator<Item = (I, Point)>,
    {
        let (ids, xs, ys) = split_native(touches);
        self.process_end(view, &ids, &xs, &ys);
    }

    pub fn touches_cancelled<T>(&mut self, view: &ViewTransform, touches: T)
    where
        T: IntoIterator<Item = (I, Point)>,
    {
        let (ids, xs, ys) = split_native(touches);
        self.process_cancel(view, &ids, &xs, &ys);
    }

    fn bound_touch_mut(&mut self, id: &I, phase: TouchPhase) -> Option<&mut Touch> {
        let touch = self
            .bindings
            .get(id)
            .and_then(|&index| self.slots.get_mut(index))
            .and_then(Option::as_mut);
        if touch.is_none() {
            self.stats.skipped_unknown += 1;
            tracing::trace!("Touch: {} event for unknown ID: {:?}. Skipping.", phase, id);
        }
        touch
    }

    fn release(&mut self, id: &I) {
        if let Some(index) = self.bindings.remove(id) {
            self.mask.release(index);
            self.slots[index] = None;
            tracing::debug!("Touch: Released slot {} held by ID: {:?}", index, id);
        }
    }

    fn dispatch(&mut self, phase: TouchPhase, batch: Vec<Touch>) {
        if batch.is_empty() {
            tracing::trace!("Touch: Empty {} batch, nothing to dispatch.", phase);
            return;
        }
        match self.delegate.as_deref_mut() {
            Some(receiver) => delegate::dispatch(receiver, phase, &batch),
            None => tracing::trace!("Touch: No delegate set, dropping {} batch of {}.", phase, batch.len()),
        }
    }
}

fn batch_len<I>(phase: TouchPhase, ids: &[I], xs: &[f64], ys: &[f64]) -> usize {
    let len = ids.len().min(xs.len()).min(ys.len());
    if ids.len() != xs.len() || ids.len() != ys.len() {
        tracing::warn!(
            "Touch: Mismatched {} arrays (ids: {}, xs: {}, ys: {}). Processing first {}.",
            phase,
            ids.len(),
            xs.len(),
            ys.len(),
            len
        );
    }
    len
}

fn split_native<I, T>(touches: T) -> (Vec<I>, Vec<f64>, Vec<f64>)
where
    T: IntoIterator<Item = (I, Point)>,
{
    let mut ids = Vec::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (id, location) in touches {
        ids.push(id);
        xs.push(location.x);
        ys.push(location.y);
    }
    (ids, xs, ys)
}
