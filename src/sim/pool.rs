//! Fixed-capacity slot arenas for transient entities
//!
//! Pools are allocated once and never grow; slots toggle between active and
//! inactive in place instead of being created or destroyed. Iteration order
//! is always pool order, which keeps collision scans deterministic.

use serde::{Deserialize, Serialize};

/// A pooled entity that can be switched on and off in place.
pub trait Slot {
    fn active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Fixed-capacity arena of reusable slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPool<T> {
    slots: Vec<T>,
}

impl<T: Slot + Default> SlotPool<T> {
    /// Create a pool with `capacity` inactive slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T: Slot> SlotPool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently active slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active()).count()
    }

    /// First slot not currently in use, in pool order.
    pub fn first_inactive_mut(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.active())
    }

    /// Iterate active slots in pool order.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.active())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Switch every slot off (used by reset).
    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }
}
