//! The three obstacle variants and their per-kind behavior
//!
//! Every obstacle spawns just past the right edge, scrolls strictly left at
//! `BASE_SCROLL_SPEED` plus the difficulty gradient at spawn time, and is
//! pruned once fully past the left edge. Each variant carries a visual
//! sub-kind drawn at spawn and its own collision shape.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{ball_player_collision, box_barrier_collision, rounded_barrier_collision};
use super::entity::Kinematic;
use super::player::Player;
use crate::consts::*;

/// Visual sub-kinds of the tall ground barrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeKind {
    TallGreen,
    TallOrange,
    Green,
    Orange,
}

impl TreeKind {
    /// Collision-box dimensions per sub-kind
    pub fn size(self) -> Vec2 {
        match self {
            TreeKind::TallGreen | TreeKind::TallOrange => Vec2::new(82.0, 249.0),
            TreeKind::Green => Vec2::new(86.0, 204.0),
            TreeKind::Orange => Vec2::new(85.0, 259.0),
        }
    }

    fn pick(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => TreeKind::TallGreen,
            1 => TreeKind::TallOrange,
            2 => TreeKind::Green,
            _ => TreeKind::Orange,
        }
    }
}

/// Tall ground barrier. Rests on the lane bottom; its collision test
/// forgives grazes at the top corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub kind: TreeKind,
    pub width: f32,
    pub height: f32,
    pub pos: Vec2,
    pub x_speed: f32,
}

impl Tree {
    pub fn spawn(lane_size: Vec2, x_speed: f32, rng: &mut impl Rng) -> Self {
        let kind = TreeKind::pick(rng);
        let size = kind.size();
        Self {
            kind,
            width: size.x,
            height: size.y,
            pos: Vec2::new(lane_size.x + size.x / 2.0, lane_size.y - size.y / 2.0),
            x_speed,
        }
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        let left = self.pos.x - self.width / 2.0 + 10.0;
        let right = self.pos.x + self.width / 2.0 - 10.0;
        let top = self.pos.y - self.height / 2.0 + 5.0;
        rounded_barrier_collision(
            player.pos,
            Vec2::new(player.width, player.height),
            left,
            right,
            top,
        )
    }
}

impl Kinematic for Tree {
    fn advance(&mut self) {
        self.pos.x -= self.x_speed;
    }

    fn is_off_screen(&self) -> bool {
        self.pos.x < -self.width
    }
}

/// Visual sub-kinds of the low ground barrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FenceKind {
    Wooden,
    Iron,
}

impl FenceKind {
    pub fn size(self) -> Vec2 {
        match self {
            FenceKind::Wooden => Vec2::new(104.0, 77.0),
            FenceKind::Iron => Vec2::new(120.0, 121.0),
        }
    }

    fn pick(rng: &mut impl Rng) -> Self {
        if rng.random_range(0..2) == 0 { FenceKind::Wooden } else { FenceKind::Iron }
    }
}

/// Low ground barrier with a strict bounding-box collider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fence {
    pub kind: FenceKind,
    pub width: f32,
    pub height: f32,
    pub pos: Vec2,
    pub x_speed: f32,
}

impl Fence {
    pub fn spawn(lane_size: Vec2, x_speed: f32, rng: &mut impl Rng) -> Self {
        let kind = FenceKind::pick(rng);
        let size = kind.size();
        Self {
            kind,
            width: size.x,
            height: size.y,
            pos: Vec2::new(lane_size.x + size.x / 2.0, lane_size.y - size.y / 2.0),
            x_speed,
        }
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        let left = self.pos.x - self.width / 2.0 + 3.0;
        let right = self.pos.x + self.width / 2.0 - 3.0;
        let top = self.pos.y - self.height / 2.0 + 5.0;
        box_barrier_collision(
            player.pos,
            Vec2::new(player.width, player.height),
            left,
            right,
            top,
        )
    }
}

impl Kinematic for Fence {
    fn advance(&mut self) {
        self.pos.x -= self.x_speed;
    }

    fn is_off_screen(&self) -> bool {
        self.pos.x < -self.width
    }
}

/// Bouncing ball. Spawns in the air, falls under its own per-instance
/// gravity and reflects off the lane floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pinball {
    pub radius: f32,
    /// Fill color, drawn at spawn (cosmetic, but part of the snapshot)
    pub color: [u8; 3],
    pub pos: Vec2,
    pub x_speed: f32,
    pub y_speed: f32,
    pub gravity: f32,
    /// Bounce restitution divisor; 1.0 = lossless bounce
    pub restitution: f32,
    /// Height of the owning lane; fixes the floor line
    pub lane_height: f32,
}

impl Pinball {
    pub fn spawn(lane_size: Vec2, x_speed: f32, rng: &mut impl Rng) -> Self {
        let color = [rng.random(), rng.random(), rng.random()];
        let gravity = 0.1 + (rng.random::<f32>() / 3.0) * 2.0;
        Self {
            radius: PINBALL_RADIUS,
            color,
            pos: Vec2::new(lane_size.x + PINBALL_RADIUS, lane_size.y - PINBALL_SPAWN_DROP),
            x_speed,
            y_speed: 0.0,
            gravity,
            restitution: 1.0,
            lane_height: lane_size.y,
        }
    }

    /// Y of the ball's center when resting on the lane floor
    #[inline]
    pub fn floor(&self) -> f32 {
        self.lane_height - self.radius
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        ball_player_collision(
            self.pos,
            self.radius,
            player.pos,
            Vec2::new(player.width, player.height),
        )
    }
}

impl Kinematic for Pinball {
    fn advance(&mut self) {
        let floor = self.floor();
        if self.pos.y + self.y_speed > floor {
            // Reflect off the floor instead of passing through it
            self.y_speed = -self.y_speed / self.restitution;
        } else {
            self.y_speed += self.gravity;
        }
        self.pos.x -= self.x_speed;
        self.pos.y += self.y_speed;
        if self.pos.y > floor {
            self.pos.y = floor;
        }
    }

    fn is_off_screen(&self) -> bool {
        self.pos.x < -(self.radius * 2.0)
    }
}

/// Closed set of obstacle variants, dispatched by the lane simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Obstacle {
    Tree(Tree),
    Fence(Fence),
    Pinball(Pinball),
}

impl Obstacle {
    /// Run this obstacle's shape test against the player
    pub fn collides_with(&self, player: &Player) -> bool {
        match self {
            Obstacle::Tree(tree) => tree.collides_with(player),
            Obstacle::Fence(fence) => fence.collides_with(player),
            Obstacle::Pinball(ball) => ball.collides_with(player),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Obstacle::Tree(_) => "tree",
            Obstacle::Fence(_) => "fence",
            Obstacle::Pinball(_) => "pinball",
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Obstacle::Tree(tree) => tree.pos,
            Obstacle::Fence(fence) => fence.pos,
            Obstacle::Pinball(ball) => ball.pos,
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            Obstacle::Tree(tree) => tree.width,
            Obstacle::Fence(fence) => fence.width,
            Obstacle::Pinball(ball) => ball.radius * 2.0,
        }
    }

    pub fn x_speed(&self) -> f32 {
        match self {
            Obstacle::Tree(tree) => tree.x_speed,
            Obstacle::Fence(fence) => fence.x_speed,
            Obstacle::Pinball(ball) => ball.x_speed,
        }
    }
}

impl Kinematic for Obstacle {
    fn advance(&mut self) {
        match self {
            Obstacle::Tree(tree) => tree.advance(),
            Obstacle::Fence(fence) => fence.advance(),
            Obstacle::Pinball(ball) => ball.advance(),
        }
    }

    fn is_off_screen(&self) -> bool {
        match self {
            Obstacle::Tree(tree) => tree.is_off_screen(),
            Obstacle::Fence(fence) => fence.is_off_screen(),
            Obstacle::Pinball(ball) => ball.is_off_screen(),
        }
    }

    fn on_removed(&mut self) {
        match self {
            Obstacle::Tree(tree) => tree.on_removed(),
            Obstacle::Fence(fence) => fence.on_removed(),
            Obstacle::Pinball(ball) => ball.on_removed(),
        }
    }
}
