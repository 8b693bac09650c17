//! Strider - deterministic core of a side-scrolling endless runner
//!
//! A player character auto-runs while the player times jumps over incoming
//! obstacles; obstacle frequency and speed scale with distance traveled.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, lanes)
//! - `render`: Render-hook seam for a presentation layer (no drawing here)
//! - `snapshot`: Save/restore of a full session with validation
//!
//! The crate owns no window, input binding, or frame clock. An external
//! driver calls [`sim::Session::tick`] once per frame and delivers jump
//! input between ticks.

pub mod render;
pub mod sim;
pub mod snapshot;

pub use render::{NullRender, RenderHook};
pub use sim::{GameMode, Lane, LanePhase, Obstacle, Player, Session, Spawner};
pub use snapshot::{persist_snapshot, restore_snapshot};

/// Game configuration constants
pub mod consts {
    /// Target tick rate of the external frame driver (informational; the
    /// driver owns the clock and may throttle)
    pub const TICK_HZ: u32 = 100;

    /// Lane dimensions: one full-height lane in normal mode
    pub const LANE_WIDTH: f32 = 1600.0;
    pub const LANE_HEIGHT: f32 = 900.0;
    /// Hard mode splits the screen into two half-height lanes
    pub const SPLIT_LANE_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 110.0;
    pub const PLAYER_START_X: f32 = 200.0;
    /// Downward acceleration per tick while airborne
    pub const PLAYER_GRAVITY: f32 = 0.9;
    /// Terminal fall speed; also the magnitude of the jump impulse
    pub const MAX_FALL_SPEED: f32 = 24.3;
    /// Gap between the player's feet and the lane bottom
    pub const GROUND_MARGIN: f32 = 5.0;

    /// Base leftward scroll speed of every obstacle; the difficulty
    /// gradient is added on top at spawn time
    pub const BASE_SCROLL_SPEED: f32 = 7.0;

    /// Difficulty gradient = min(distance / 100, 20)
    pub const MAX_GRADIENT: f32 = 20.0;
    pub const DISTANCE_PER_GRADIENT: f32 = 100.0;
    /// Distance gained per tick: base + bonus * gradient
    pub const BASE_DISTANCE_PER_TICK: f32 = 0.1;
    pub const GRADIENT_DISTANCE_BONUS: f32 = 0.01;

    /// Spawn spacing gate: no spawn until more than
    /// `SPAWN_GATE_BASE - gradient * SPAWN_GATE_SCALE` ticks since the last
    pub const SPAWN_GATE_BASE: f32 = 80.0;
    pub const SPAWN_GATE_SCALE: f32 = 3.0;
    /// One-in-N spawn odds per variant at gradient 0; each N shrinks by
    /// `SPAWN_ODDS_SCALE * gradient` as difficulty rises
    pub const FENCE_SPAWN_ODDS: f32 = 100.0;
    pub const TREE_SPAWN_ODDS: f32 = 120.0;
    pub const PINBALL_SPAWN_ODDS: f32 = 200.0;
    pub const SPAWN_ODDS_SCALE: f32 = 2.0;
    /// Pinballs only appear once the run is past its opening stretch
    pub const PINBALL_MIN_GRADIENT: f32 = 0.5;

    /// Pinball defaults
    pub const PINBALL_RADIUS: f32 = 20.0;
    /// Pinballs spawn this far above the lane bottom
    pub const PINBALL_SPAWN_DROP: f32 = 400.0;
    /// Extra pinball gravity per unit of difficulty gradient
    pub const PINBALL_GRAVITY_BONUS: f32 = 0.06;
}
