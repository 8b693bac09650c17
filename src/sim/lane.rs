//! One lane of play: a player, its live obstacles, and the per-tick loop

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Kinematic;
use super::obstacle::Obstacle;
use super::player::Player;
use super::spawn::Spawner;
use crate::render::RenderHook;

/// Lane lifecycle. `Collided` is terminal; further ticks are no-ops that
/// keep reporting the collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanePhase {
    /// Created but not started; ticks are ignored
    Idle,
    /// Accepting ticks
    Running,
    /// A collision ended this lane
    Collided,
}

/// An independent unit of play. A session owns one lane in normal mode and
/// two in split-screen hard mode; lanes never share entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    /// Lane dimensions (width, height) in lane coordinates
    pub size: Vec2,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub phase: LanePhase,
    /// Jump input queued since the last tick; applied at the start of the
    /// next tick, before integration, so input timing is deterministic
    #[serde(default)]
    queued_jump: bool,
}

impl Lane {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            player: Player::new(size.y),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            phase: LanePhase::Idle,
            queued_jump: false,
        }
    }

    /// Begin accepting ticks
    pub fn start(&mut self) {
        if self.phase == LanePhase::Idle {
            self.phase = LanePhase::Running;
        }
    }

    /// Queue a jump for the next tick
    pub fn queue_jump(&mut self) {
        if self.phase == LanePhase::Running {
            self.queued_jump = true;
        }
    }

    pub fn toggle_cheat(&mut self) {
        self.player.toggle_cheat();
    }

    /// Advance this lane one tick. Returns true if the lane has collided
    /// (this tick or earlier).
    pub fn tick(
        &mut self,
        lane_index: usize,
        gradient: f32,
        rng: &mut impl Rng,
        render: &mut dyn RenderHook,
    ) -> bool {
        match self.phase {
            LanePhase::Idle => return false,
            LanePhase::Collided => return true,
            LanePhase::Running => {}
        }

        if std::mem::take(&mut self.queued_jump) {
            self.player.jump();
        }

        // Spawn first; a new obstacle takes its first step this same tick
        if let Some(ob) = self.spawner.try_spawn(self.size, gradient, rng) {
            self.obstacles.push(ob);
        }

        self.player.advance();
        for ob in &mut self.obstacles {
            ob.advance();
        }

        // Prune everything that scrolled off the left edge
        let mut retained = Vec::with_capacity(self.obstacles.len());
        for mut ob in self.obstacles.drain(..) {
            if ob.is_off_screen() {
                ob.on_removed();
                render.retire_obstacle(lane_index, &ob);
            } else {
                retained.push(ob);
            }
        }
        self.obstacles = retained;

        render.draw_player(lane_index, &self.player);
        for ob in &self.obstacles {
            render.draw_obstacle(lane_index, ob);
        }

        // First hit ends the lane; remaining checks are skipped
        if let Some(hit) = self
            .obstacles
            .iter()
            .find(|ob| ob.collides_with(&self.player))
        {
            log::info!(
                "lane {lane_index}: player hit {} at x={:.1}",
                hit.name(),
                hit.pos().x
            );
            self.phase = LanePhase::Collided;
            return true;
        }
        false
    }
}
