//! Shared kinematic contract for everything that moves in a lane

/// Position/velocity integration contract shared by the player and all
/// obstacle kinds. A lane advances every entity through this trait once per
/// tick and prunes the ones that have scrolled away.
pub trait Kinematic {
    /// Update position for one tick. No side effects beyond internal state.
    fn advance(&mut self);

    /// True once the entity has scrolled fully past the left edge
    /// (`x < -width`). The player never leaves the lane.
    fn is_off_screen(&self) -> bool;

    /// Release per-entity resources on removal. Simulation state holds
    /// none, so the default is a no-op; a presentation layer drops its
    /// visual handle through [`crate::render::RenderHook::retire_obstacle`].
    fn on_removed(&mut self) {}
}
