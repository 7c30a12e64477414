//! Rejection-sampling spawn planner
//!
//! Placement is best-effort: candidates that violate a separation
//! constraint are re-rolled up to a fixed attempt budget, after which the
//! last candidate is accepted as-is so spawning can never stall a tick.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::SlotPool;
use super::state::{FishSlot, HoleSlot, Penguin};
use crate::consts::*;

/// Uniform candidate in the centered spawn square.
fn sample_xz(rng: &mut Pcg32) -> (f32, f32) {
    let extent = PLATFORM_SIZE * SPAWN_REGION;
    (
        (rng.random::<f32>() - 0.5) * extent,
        (rng.random::<f32>() - 0.5) * extent,
    )
}

/// Choose a position for a new fish.
///
/// Valid candidates keep clear of every open hole and of both penguins.
/// Exhausting the attempt budget falls back to the last candidate.
pub fn place_fish(
    holes: &SlotPool<HoleSlot>,
    mother: &Penguin,
    chick: &Penguin,
    rng: &mut Pcg32,
) -> Vec3 {
    let mut pos = Vec3::ZERO;
    for _ in 0..SPAWN_ATTEMPTS {
        let (x, z) = sample_xz(rng);
        pos = Vec3::new(x, FISH_Y_OFFSET, z);

        let clear_of_holes = holes
            .iter_active()
            .all(|h| pos.distance(h.pos) >= FISH_HOLE_SEPARATION);
        let clear_of_penguins = pos.distance(mother.pos) >= FISH_PENGUIN_SEPARATION
            && pos.distance(chick.pos) >= FISH_PENGUIN_SEPARATION;

        if clear_of_holes && clear_of_penguins {
            return pos;
        }
    }
    log::debug!("fish placement budget exhausted, accepting {pos}");
    pos
}

/// Choose a position for a new hole.
///
/// Valid candidates keep the platform center safe, stay clear of both
/// penguins and of every other open hole. Same budget fallback as fish.
pub fn place_hole(
    holes: &SlotPool<HoleSlot>,
    mother: &Penguin,
    chick: &Penguin,
    rng: &mut Pcg32,
) -> Vec3 {
    let mut pos = Vec3::ZERO;
    for _ in 0..SPAWN_ATTEMPTS {
        let (x, z) = sample_xz(rng);
        pos = Vec3::new(x, 0.0, z);

        let clear_of_center = (x * x + z * z).sqrt() >= HOLE_CENTER_CLEARANCE;
        let clear_of_penguins = pos.distance(mother.pos) >= HOLE_PENGUIN_SEPARATION
            && pos.distance(chick.pos) >= HOLE_PENGUIN_SEPARATION;
        let clear_of_holes = holes
            .iter_active()
            .all(|h| pos.distance(h.pos) >= HOLE_HOLE_SEPARATION);

        if clear_of_center && clear_of_penguins && clear_of_holes {
            return pos;
        }
    }
    log::debug!("hole placement budget exhausted, accepting {pos}");
    pos
}

/// Refill pass for the fish pool: activates at most the first inactive
/// slot. A full pool is a no-op.
pub fn refill_fish(
    fish: &mut SlotPool<FishSlot>,
    holes: &SlotPool<HoleSlot>,
    mother: &Penguin,
    chick: &Penguin,
    rng: &mut Pcg32,
) {
    let Some(slot) = fish.first_inactive_mut() else {
        return;
    };
    slot.pos = place_fish(holes, mother, chick, rng);
    slot.active = true;
    slot.anim_phase = 0.0;
    slot.bob_amplitude = rng.random_range(FISH_BOB_MIN..FISH_BOB_MAX);
}

/// Refresh pass for the hole pool: each inactive slot independently opens
/// with `HOLE_REROLL_CHANCE`. Slots already open are left untouched.
pub fn refresh_holes(
    holes: &mut SlotPool<HoleSlot>,
    mother: &Penguin,
    chick: &Penguin,
    rng: &mut Pcg32,
) {
    for i in 0..holes.capacity() {
        if holes.slots()[i].active {
            continue;
        }
        if !rng.random_bool(HOLE_REROLL_CHANCE) {
            continue;
        }
        // Earlier slots opened in this pass count toward separation checks
        let pos = place_hole(holes, mother, chick, rng);
        let slot = &mut holes.slots_mut()[i];
        slot.pos = pos;
        slot.active = true;
        slot.anim_phase = 0.0;
    }
}
