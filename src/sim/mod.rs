//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick integration only
//! - Seeded RNG only, threaded explicitly through spawning
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod lane;
pub mod obstacle;
pub mod player;
pub mod session;
pub mod spawn;

pub use entity::Kinematic;
pub use lane::{Lane, LanePhase};
pub use obstacle::{Fence, FenceKind, Obstacle, Pinball, Tree, TreeKind};
pub use player::{Player, Pose};
pub use session::{GameMode, Session};
pub use spawn::Spawner;
