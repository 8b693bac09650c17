//! The controllable runner: jump state machine and gravity integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Kinematic;
use crate::consts::*;

/// Which sprite a renderer should show for the player this frame.
///
/// Cycling through the run frames is the renderer's business; the sim only
/// exposes the state needed to pick a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Run,
    Rise,
    Fall,
}

/// The player character. Auto-runs in place; only its vertical motion is
/// simulated, driven by jump impulses and per-tick gravity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position in lane coordinates (y grows downward)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical speed; negative while rising
    pub y_speed: f32,
    pub gravity: f32,
    /// Terminal fall speed, and the magnitude of the jump impulse
    pub max_fall_speed: f32,
    pub is_jumping: bool,
    /// Cheat mode permits mid-air jumps
    pub is_cheating: bool,
    /// Height of the owning lane; fixes the ground line
    pub lane_height: f32,
}

impl Player {
    pub fn new(lane_height: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, lane_height - 60.0),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            y_speed: 0.0,
            gravity: PLAYER_GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            is_jumping: false,
            is_cheating: false,
            lane_height,
        }
    }

    /// Y of the player's center when standing on the ground line
    #[inline]
    pub fn ground(&self) -> f32 {
        self.lane_height - self.height / 2.0 - GROUND_MARGIN
    }

    /// Start a jump: an instantaneous upward impulse equal in magnitude to
    /// the terminal fall speed. Ignored while airborne unless cheating.
    pub fn jump(&mut self) {
        if self.is_cheating || !self.is_jumping {
            self.is_jumping = true;
            self.y_speed = -self.max_fall_speed;
        }
    }

    /// Flip cheat mode (infinite jump)
    pub fn toggle_cheat(&mut self) {
        self.is_cheating = !self.is_cheating;
    }

    /// Sprite selection state for the render layer
    pub fn pose(&self) -> Pose {
        if self.is_jumping {
            if self.y_speed <= 5.0 { Pose::Rise } else { Pose::Fall }
        } else {
            Pose::Run
        }
    }
}

impl Kinematic for Player {
    fn advance(&mut self) {
        let ground = self.ground();
        // Move by the current speed, unless that would carry the player
        // above the top of the scene (guards against runaway extrapolation
        // on large upward speeds)
        if self.pos.y + self.y_speed >= -self.height {
            self.pos.y += self.y_speed;
        }
        if self.pos.y == ground {
            // Landed exactly on the ground line
            self.y_speed = 0.0;
            self.is_jumping = false;
        } else if self.pos.y < ground {
            // Airborne: accumulate gravity up to terminal speed
            if self.y_speed + self.gravity <= self.max_fall_speed {
                self.y_speed += self.gravity;
            }
        } else {
            // Overshot the ground line; land
            self.pos.y = ground;
            self.y_speed = 0.0;
            self.is_jumping = false;
        }
        if self.pos.y > ground {
            // Unreachable after the clamp above. Repair the state and keep
            // ticking rather than fail the simulation.
            log::warn!(
                "player below ground after clamp (y={}, ground={})",
                self.pos.y,
                ground
            );
            self.pos.y = ground;
        }
    }

    /// The player is never pruned
    fn is_off_screen(&self) -> bool {
        false
    }
}
