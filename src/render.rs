//! Render-hook seam between the simulation and a presentation layer
//!
//! The sim never draws. After advancing a tick, each lane reports its
//! surviving entities through this trait so a renderer can move sprites,
//! and reports pruned obstacles so it can drop their visual handles.
//! Headless callers (tests, servers, replay tools) use [`NullRender`].

use crate::sim::{Obstacle, Player};

/// Per-tick drawing callbacks, invoked once per surviving entity after
/// integration. Implementations must not mutate simulation state.
pub trait RenderHook {
    fn draw_player(&mut self, lane_index: usize, player: &Player);
    fn draw_obstacle(&mut self, lane_index: usize, obstacle: &Obstacle);

    /// An obstacle scrolled off screen and was removed this tick
    fn retire_obstacle(&mut self, _lane_index: usize, _obstacle: &Obstacle) {}
}

/// No-op renderer for headless simulation
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderHook for NullRender {
    fn draw_player(&mut self, _lane_index: usize, _player: &Player) {}
    fn draw_obstacle(&mut self, _lane_index: usize, _obstacle: &Obstacle) {}
}
