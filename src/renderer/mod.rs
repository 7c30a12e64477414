//! Rendering seam
//!
//! Renderers consume a read-only view of the simulation after each tick and
//! feed nothing back. Actual 3D drawing (sphere/cone models, viewport
//! splitting, cameras) lives outside this crate; what ships here is the
//! trait, the HUD status line, a placeholder texture loader, and a logging
//! renderer for headless runs.

use crate::consts::{CHICK_ENERGY_MAX, GAME_DURATION};
use crate::sim::{GameState, Phase};

/// Read-only consumer of post-tick simulation state.
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Raw RGB8 pixels for platform/sky textures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// 2x2 all-white placeholder.
    pub fn placeholder() -> Self {
        Self {
            width: 2,
            height: 2,
            pixels: vec![255; 12],
        }
    }
}

/// Texture loading stub. The asset pipeline is out of scope, so every path
/// resolves to the white placeholder.
pub fn load_texture(path: &str) -> TextureData {
    log::debug!("texture '{path}' stubbed with placeholder");
    TextureData::placeholder()
}

/// One-line HUD summary, same shape as the classic overlay.
pub fn hud_line(state: &GameState) -> String {
    let phase = match state.phase {
        Phase::Playing => "Playing",
        Phase::Won => "YOU WIN!",
        Phase::Lost => "GAME OVER",
    };
    format!(
        "Time: {:.1}/{:.0}s | Baby Energy: {:.1}/{:.0}s | State: {} | Fish: {}",
        state.elapsed,
        GAME_DURATION,
        state.chick_energy,
        CHICK_ENERGY_MAX,
        phase,
        state.fish.active_count(),
    )
}

/// Renderer that logs the HUD line at a fixed tick cadence.
#[derive(Debug)]
pub struct DebugRenderer {
    every_ticks: u64,
}

impl DebugRenderer {
    pub fn new(every_ticks: u64) -> Self {
        Self {
            every_ticks: every_ticks.max(1),
        }
    }
}

impl Renderer for DebugRenderer {
    fn render(&mut self, state: &GameState) {
        if state.tick_count % self.every_ticks == 0 {
            log::info!("{}", hud_line(state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_line_reports_the_fresh_session() {
        let state = GameState::new(1);
        let line = hud_line(&state);
        assert!(line.starts_with("Time: 0.0/300s"));
        assert!(line.contains("Baby Energy: 60.0/60s"));
        assert!(line.contains("State: Playing"));
        assert!(line.contains("Fish: 1"));
    }

    #[test]
    fn hud_line_names_terminal_phases() {
        let mut state = GameState::new(1);
        state.phase = Phase::Won;
        assert!(hud_line(&state).contains("YOU WIN!"));
        state.phase = Phase::Lost;
        assert!(hud_line(&state).contains("GAME OVER"));
    }

    #[test]
    fn load_texture_always_yields_the_placeholder() {
        let tex = load_texture("ice.bmp");
        assert_eq!(tex, TextureData::placeholder());
        assert_eq!(tex.pixels.len(), (tex.width * tex.height * 3) as usize);
    }
}
