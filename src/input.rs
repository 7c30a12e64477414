//! Key-edge plumbing
//!
//! The windowing layer delivers discrete press/release edges; this module
//! folds them into held-key state and hands the simulation a [`TickInput`]
//! snapshot each tick. Reset and quit are one-shot requests consumed by the
//! driver between ticks, never by the simulation itself.

use crate::sim::TickInput;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Reset,
    Quit,
}

/// Held-key state fed by raw key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    reset_requested: bool,
    quit_requested: bool,
}

impl InputState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.forward = true,
            Key::Down => self.backward = true,
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Reset => self.reset_requested = true,
            Key::Quit => self.quit_requested = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.forward = false,
            Key::Down => self.backward = false,
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            // One-shot requests are cleared by the driver, not by release
            Key::Reset | Key::Quit => {}
        }
    }

    /// Command set for the next tick.
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_forward: self.forward,
            move_backward: self.backward,
            rotate_left: self.left,
            rotate_right: self.right,
        }
    }

    /// Consume a pending reset request, if any.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
