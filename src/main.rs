//! Headless demo driver
//!
//! Runs the simulation at the fixed tick interval with a scripted input
//! source and the logging renderer. A windowed build hooks into the same
//! seams: `InputState` for key edges and `Renderer` for post-tick reads.

use floe_rescue::consts::SIM_DT;
use floe_rescue::input::{InputState, Key};
use floe_rescue::renderer::{DebugRenderer, Renderer};
use floe_rescue::sim::{GameState, Phase, tick};

fn seed_from_env() -> u64 {
    std::env::var("FLOE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
}

fn main() {
    env_logger::init();

    let seed = seed_from_env();
    log::info!("starting run with seed {seed}");

    let mut state = GameState::new(seed);
    let mut input = InputState::default();
    let mut renderer = DebugRenderer::new(60);

    // Scripted demo: drive forward in a slow left arc for up to two
    // minutes of simulated time.
    input.key_down(Key::Up);
    input.key_down(Key::Left);

    let mut last_phase = state.phase;
    let max_ticks = (120.0 / SIM_DT) as u64;
    for _ in 0..max_ticks {
        if input.take_reset() {
            state.reset();
        }
        tick(&mut state, &input.tick_input(), SIM_DT);
        renderer.render(&state);

        if state.phase != last_phase {
            log::info!("phase changed: {last_phase:?} -> {:?}", state.phase);
            last_phase = state.phase;
        }
        if state.phase != Phase::Playing || input.quit_requested() {
            break;
        }
    }

    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("final state: {json}"),
        Err(e) => log::warn!("state serialization failed: {e}"),
    }
}
