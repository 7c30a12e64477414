//! Floe Rescue - a fixed-tick penguin rescue simulation
//!
//! A mother penguin collects fish and delivers them to her chick before the
//! chick's energy runs out, while dodging holes in the ice.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `input`: Key-edge plumbing that feeds held commands into the sim
//! - `renderer`: Read-only rendering seam over simulation state

pub mod input;
pub mod renderer;
pub mod sim;

pub use sim::{GameState, Phase, TickInput, tick};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the classic 16 ms timer, ~60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Seconds of survival until the run is won
    pub const GAME_DURATION: f32 = 300.0;
    /// Seconds the chick can go without a fish delivery
    pub const CHICK_ENERGY_MAX: f32 = 60.0;

    /// Mother penguin linear speed (units/sec)
    pub const PENGUIN_SPEED: f32 = 1.5;
    /// Turn rate (degrees/sec)
    pub const ROTATION_SPEED: f32 = 90.0;
    /// Wing flap animation rate while moving (radians/sec)
    pub const FLAP_RATE: f32 = 8.0;

    /// Habitable square platform extent
    pub const PLATFORM_SIZE: f32 = 10.0;
    /// Keep-back from the platform edge when clamping
    pub const PLATFORM_MARGIN: f32 = 0.3;
    /// Resting height of a penguin on the ice
    pub const PENGUIN_Y_OFFSET: f32 = 0.48;

    /// Pool capacities
    pub const MAX_FISH: usize = 5;
    pub const MAX_HOLES: usize = 8;

    /// Seconds between refill passes
    pub const FISH_SPAWN_INTERVAL: f32 = 5.0;
    pub const HOLE_SPAWN_INTERVAL: f32 = 12.0;

    /// Hole geometry, plus padding that widens the lethal area slightly
    pub const HOLE_RADIUS: f32 = 0.4;
    pub const HOLE_PADDING: f32 = 0.1;

    /// Interaction radii. Deliberately larger than the visual geometry so
    /// pickups and deliveries feel forgiving.
    pub const MOTHER_BODY_RADIUS: f32 = 0.3;
    pub const MOTHER_REACH_RADIUS: f32 = 0.4;
    pub const MOTHER_DELIVER_RADIUS: f32 = 0.5;
    pub const FISH_PICK_RADIUS: f32 = 0.2;
    pub const CHICK_BODY_RADIUS: f32 = 0.3;

    /// Fraction of the platform used for spawn candidate sampling
    pub const SPAWN_REGION: f32 = 0.6;
    /// Rejection-sampling attempt budget per placement
    pub const SPAWN_ATTEMPTS: u32 = 30;
    /// Holes never open this close to the platform center
    pub const HOLE_CENTER_CLEARANCE: f32 = 2.0;
    /// Chance that an inactive hole slot fills on a refresh pass
    pub const HOLE_REROLL_CHANCE: f64 = 0.5;
    /// Minimum separations for spawn candidate acceptance
    pub const FISH_HOLE_SEPARATION: f32 = 1.2;
    pub const FISH_PENGUIN_SEPARATION: f32 = 1.0;
    pub const HOLE_PENGUIN_SEPARATION: f32 = 1.5;
    pub const HOLE_HOLE_SEPARATION: f32 = 1.2;

    /// Transient entity animation rates (radians/sec)
    pub const FISH_ANIM_RATE: f32 = 3.0;
    pub const HOLE_ANIM_RATE: f32 = 2.0;
    /// Fish bob amplitude range, randomized per spawn
    pub const FISH_BOB_MIN: f32 = 0.1;
    pub const FISH_BOB_MAX: f32 = 0.3;
    /// Height fish hover above the ice
    pub const FISH_Y_OFFSET: f32 = 0.3;
}

/// Unit forward vector for a heading in degrees (0 = facing -Z)
#[inline]
pub fn heading_forward(heading_deg: f32) -> Vec3 {
    let r = heading_deg.to_radians();
    Vec3::new(-r.sin(), 0.0, -r.cos())
}
