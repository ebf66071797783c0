//! Paddle input
//!
//! Input is polled, not queued: each step reads whichever keys are held at
//! that moment. Hosts on a single thread can use [`Controls`] directly; hosts
//! that read the keyboard on another thread write through [`SharedControls`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Held directional keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputState {
    /// Apply a key press or release. Returns false for keys that don't steer.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "ArrowUp" | "Up" | "w" | "W" => self.move_up = pressed,
            "ArrowDown" | "Down" | "s" | "S" => self.move_down = pressed,
            _ => return false,
        }
        true
    }

    fn to_bits(self) -> u8 {
        (self.move_up as u8) | ((self.move_down as u8) << 1)
    }

    fn from_bits(bits: u8) -> Self {
        Self {
            move_up: bits & 0b01 != 0,
            move_down: bits & 0b10 != 0,
        }
    }
}

/// Anything the session can poll for paddle input
pub trait InputSource {
    fn poll(&self, side: Side) -> InputState;
}

/// Plain per-side input, owned by a single-threaded host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: InputState,
    pub right: InputState,
}

impl Controls {
    pub fn side_mut(&mut self, side: Side) -> &mut InputState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl InputSource for Controls {
    fn poll(&self, side: Side) -> InputState {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Lock-free input shared with another thread.
///
/// Both sides are packed into one byte so a poll never observes half of a
/// write. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SharedControls {
    bits: Arc<AtomicU8>,
}

impl SharedControls {
    pub fn new() -> Self {
        Self::default()
    }

    fn shift(side: Side) -> u8 {
        match side {
            Side::Left => 0,
            Side::Right => 2,
        }
    }

    /// Replace one side's held keys
    pub fn set(&self, side: Side, input: InputState) {
        let shift = Self::shift(side);
        let mask = 0b11 << shift;
        let value = input.to_bits() << shift;
        // fetch_update only fails when the closure returns None
        let _ = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                Some((bits & !mask) | value)
            });
    }

    /// Apply a key event to one side. Returns false for keys that don't steer.
    pub fn handle_key(&self, side: Side, key: &str, pressed: bool) -> bool {
        let mut input = self.poll(side);
        if !input.handle_key(key, pressed) {
            return false;
        }
        self.set(side, input);
        true
    }
}

impl InputSource for SharedControls {
    fn poll(&self, side: Side) -> InputState {
        let bits = self.bits.load(Ordering::Acquire);
        InputState::from_bits(bits >> Self::shift(side))
    }
}
