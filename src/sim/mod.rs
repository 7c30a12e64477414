//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only, no wall-clock reads
//! - Seeded RNG only
//! - Pool slots visited in stable order
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use pool::{Slot, SlotPool};
pub use state::{FishSlot, GameState, HoleSlot, Penguin, Phase};
pub use tick::{TickInput, tick};
