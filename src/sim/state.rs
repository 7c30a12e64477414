//! Entity records and the simulation context
//!
//! Everything needed to reproduce a run lives here: both penguins, the
//! fish and hole pools, the countdown timers and the seeded RNG stream.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::{Slot, SlotPool};
use super::spawn;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Playing,
    /// Survived the full game duration
    Won,
    /// The chick starved or the mother fell into a hole
    Lost,
}

/// A penguin: the player-driven mother or the stationary chick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub pos: Vec3,
    /// Heading in degrees, 0 = facing -Z. Accumulates without clamping;
    /// trig wraps it implicitly.
    pub heading: f32,
    pub carrying_fish: bool,
    pub is_moving: bool,
    /// Wing flap phase in radians, advances only while moving
    pub flap_phase: f32,
    pub is_chick: bool,
}

impl Penguin {
    /// The controllable mother at her start position.
    pub fn mother() -> Self {
        Self {
            pos: Vec3::new(0.0, PENGUIN_Y_OFFSET, 2.0),
            heading: 0.0,
            carrying_fish: false,
            is_moving: false,
            flap_phase: 0.0,
            is_chick: false,
        }
    }

    /// The stationary chick waiting at the platform center.
    pub fn chick() -> Self {
        Self {
            pos: Vec3::new(0.0, PENGUIN_Y_OFFSET, 0.0),
            heading: 0.0,
            carrying_fish: false,
            is_moving: false,
            flap_phase: 0.0,
            is_chick: true,
        }
    }
}

/// A pooled fish pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSlot {
    pub pos: Vec3,
    pub active: bool,
    /// Drives the renderer's bob/rotate animation
    pub anim_phase: f32,
    pub bob_amplitude: f32,
}

impl Default for FishSlot {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            active: false,
            anim_phase: 0.0,
            bob_amplitude: FISH_BOB_MIN,
        }
    }
}

impl Slot for FishSlot {
    fn active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A pooled ice hole. Holes stay open once spawned; only a reset clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSlot {
    pub pos: Vec3,
    pub radius: f32,
    pub active: bool,
    /// Drives the renderer's ripple animation
    pub anim_phase: f32,
}

impl Default for HoleSlot {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            radius: HOLE_RADIUS,
            active: false,
            anim_phase: 0.0,
        }
    }
}

impl Slot for HoleSlot {
    fn active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Collaborators receive `&GameState` after a tick and read whatever they
/// need; only [`tick`](super::tick::tick) and [`reset`](GameState::reset)
/// mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, for reproducibility
    pub seed: u64,
    /// RNG stream. Continues across resets so consecutive runs differ.
    pub rng: Pcg32,
    pub phase: Phase,
    /// Seconds of simulated time this run
    pub elapsed: f32,
    /// Seconds left before the chick starves; restored by a delivery
    pub chick_energy: f32,
    pub fish_spawn_timer: f32,
    pub hole_spawn_timer: f32,
    /// Simulation tick counter
    pub tick_count: u64,
    pub mother: Penguin,
    pub chick: Penguin,
    pub fish: SlotPool<FishSlot>,
    pub holes: SlotPool<HoleSlot>,
}

impl GameState {
    /// Create a fresh run with the given seed.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Playing,
            elapsed: 0.0,
            chick_energy: CHICK_ENERGY_MAX,
            fish_spawn_timer: 0.0,
            hole_spawn_timer: 0.0,
            tick_count: 0,
            mother: Penguin::mother(),
            chick: Penguin::chick(),
            fish: SlotPool::new(MAX_FISH),
            holes: SlotPool::new(MAX_HOLES),
        };
        state.initial_spawn();
        state
    }

    /// Reinitialize to the starting configuration and leave `Won`/`Lost`.
    ///
    /// The RNG stream is deliberately not reseeded, so the board layout of
    /// the next run is fresh while staying reproducible from the run seed.
    pub fn reset(&mut self) {
        self.phase = Phase::Playing;
        self.elapsed = 0.0;
        self.chick_energy = CHICK_ENERGY_MAX;
        self.fish_spawn_timer = 0.0;
        self.hole_spawn_timer = 0.0;
        self.tick_count = 0;
        self.mother = Penguin::mother();
        self.chick = Penguin::chick();
        self.fish.deactivate_all();
        self.holes.deactivate_all();
        self.initial_spawn();
    }

    /// One planner pass per pool, run at session start and after reset.
    fn initial_spawn(&mut self) {
        spawn::refill_fish(
            &mut self.fish,
            &self.holes,
            &self.mother,
            &self.chick,
            &mut self.rng,
        );
        spawn::refresh_holes(&mut self.holes, &self.mother, &self.chick, &mut self.rng);
    }
}
