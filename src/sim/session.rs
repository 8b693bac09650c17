//! A full game session: one or two lanes sharing a distance counter

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lane::{Lane, LanePhase};
use crate::consts::*;
use crate::render::{NullRender, RenderHook};

/// Normal play is one full-height lane; hard mode splits the screen into
/// two half-height lanes driven by the same difficulty counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Normal,
    Hard,
}

impl GameMode {
    pub fn lane_count(self) -> usize {
        match self {
            GameMode::Normal => 1,
            GameMode::Hard => 2,
        }
    }

    fn lane_size(self) -> Vec2 {
        match self {
            GameMode::Normal => Vec2::new(LANE_WIDTH, LANE_HEIGHT),
            GameMode::Hard => Vec2::new(LANE_WIDTH, SPLIT_LANE_HEIGHT),
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Random identity of this run, used to invalidate stale saves
    pub id: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; all spawn draws come from here, so lane order is part
    /// of the determinism contract
    rng: Pcg32,
    pub mode: GameMode,
    pub lanes: Vec<Lane>,
    /// Distance traveled, in meters; monotonically increasing
    pub distance: f32,
}

impl Session {
    pub fn new(seed: u64, mode: GameMode) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let id = rng.random();
        let mut lanes: Vec<Lane> = (0..mode.lane_count())
            .map(|_| Lane::new(mode.lane_size()))
            .collect();
        for lane in &mut lanes {
            lane.start();
        }
        log::info!("new {mode:?} session {id:#018x} (seed {seed})");
        Self {
            id,
            seed,
            rng,
            mode,
            lanes,
            distance: 0.0,
        }
    }

    /// Difficulty gradient derived from distance, capped
    pub fn gradient(&self) -> f32 {
        (self.distance / DISTANCE_PER_GRADIENT).min(MAX_GRADIENT)
    }

    /// True once any lane has collided; the session is finished
    pub fn is_over(&self) -> bool {
        self.lanes.iter().any(|lane| lane.phase == LanePhase::Collided)
    }

    /// Advance the whole session one frame. Returns true when the session
    /// is over (a collision happened this tick or earlier).
    ///
    /// The gradient is computed once and shared by both lanes. The first
    /// lane to collide ends the session immediately; the remaining lane is
    /// not ticked and the distance does not grow on the game-over frame.
    pub fn tick(&mut self, render: &mut dyn RenderHook) -> bool {
        if self.is_over() {
            return true;
        }
        let gradient = self.gradient();
        for (index, lane) in self.lanes.iter_mut().enumerate() {
            if lane.tick(index, gradient, &mut self.rng, render) {
                log::info!(
                    "session {:#018x} over at {:.0}m",
                    self.id,
                    self.distance
                );
                return true;
            }
        }
        self.distance += BASE_DISTANCE_PER_TICK + GRADIENT_DISTANCE_BONUS * gradient;
        false
    }

    /// Advance one frame without a renderer
    pub fn tick_headless(&mut self) -> bool {
        self.tick(&mut NullRender)
    }

    /// Deliver a jump to one lane's player (queued for the next tick)
    pub fn input_jump(&mut self, lane_index: usize) {
        if let Some(lane) = self.lanes.get_mut(lane_index) {
            lane.queue_jump();
        }
    }

    /// Toggle cheat mode on one lane, or on every lane when `None`
    pub fn input_toggle_cheat(&mut self, lane_index: Option<usize>) {
        match lane_index {
            Some(index) => {
                if let Some(lane) = self.lanes.get_mut(index) {
                    lane.toggle_cheat();
                }
            }
            None => {
                for lane in &mut self.lanes {
                    lane.toggle_cheat();
                }
            }
        }
    }
}
