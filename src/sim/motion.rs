//! Input-to-motion mapping for the mother penguin
//!
//! Pure state transition: held commands plus a fixed delta become a new
//! position and heading. Translation uses the heading from the start of the
//! tick; rotation applies afterwards.

use super::state::Penguin;
use super::tick::TickInput;
use crate::consts::*;
use crate::heading_forward;

/// Apply one tick's worth of held movement commands to `penguin`.
pub fn apply(penguin: &mut Penguin, input: &TickInput, dt: f32) {
    penguin.is_moving = false;
    let forward = heading_forward(penguin.heading);

    if input.move_forward {
        penguin.pos += forward * PENGUIN_SPEED * dt;
        penguin.is_moving = true;
    }
    if input.move_backward {
        penguin.pos -= forward * PENGUIN_SPEED * dt;
        penguin.is_moving = true;
    }
    if input.rotate_left {
        penguin.heading += ROTATION_SPEED * dt;
    }
    if input.rotate_right {
        penguin.heading -= ROTATION_SPEED * dt;
    }

    // Keep the penguin on the ice
    let half = PLATFORM_SIZE / 2.0 - PLATFORM_MARGIN;
    penguin.pos.x = penguin.pos.x.clamp(-half, half);
    penguin.pos.z = penguin.pos.z.clamp(-half, half);

    if penguin.is_moving {
        penguin.flap_phase += FLAP_RATE * dt;
    }
}
