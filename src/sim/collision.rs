//! Shape-specific collision tests between the player and each obstacle kind
//!
//! Three distinct tests, one per obstacle variant. The ground barriers use
//! rectangle tests against the player's center with the player's half-width
//! as horizontal slack; the tall barrier additionally rounds its top corners
//! so a grazing jump over the top is forgiven. The asymmetry between the two
//! barrier tests is an intentional fairness tuning, not an inconsistency.

use glam::Vec2;

/// True when `point` lies within `radius` of `corner`
#[inline]
fn within_radius(point: Vec2, corner: Vec2, radius: f32) -> bool {
    point.distance_squared(corner) <= radius * radius
}

/// Tall ground barrier vs. player: rectangle body with circular leniency at
/// the top corners.
///
/// `left`/`right`/`top` are the barrier's already-inset collision bounds.
/// Below `top` the test is a plain span overlap; in the band one half
/// player-height above `top`, the player must also be over the barrier's
/// footprint or within half its width of a top corner, which models jumping
/// over the top with a near-miss graze allowed.
pub fn rounded_barrier_collision(
    player_pos: Vec2,
    player_size: Vec2,
    left: f32,
    right: f32,
    top: f32,
) -> bool {
    let half_w = player_size.x / 2.0;
    if player_pos.y >= top {
        player_pos.x >= left - half_w && player_pos.x <= right + half_w
    } else if player_pos.y >= top - player_size.y / 2.0 {
        (player_pos.x >= left - half_w && player_pos.x <= right + half_w)
            && ((player_pos.x >= left && player_pos.x <= right)
                || within_radius(player_pos, Vec2::new(left, top), half_w)
                || within_radius(player_pos, Vec2::new(right, top), half_w))
    } else {
        false
    }
}

/// Low ground barrier vs. player: strict axis-aligned rectangle overlap,
/// no corner leniency.
pub fn box_barrier_collision(
    player_pos: Vec2,
    player_size: Vec2,
    left: f32,
    right: f32,
    top: f32,
) -> bool {
    player_pos.x >= left - player_size.x / 2.0
        && player_pos.x <= right + player_size.x / 2.0
        && player_pos.y >= top - player_size.y / 2.0
}

/// Bouncing ball vs. player: circle against an inset player rectangle.
///
/// The rectangle trims the sprite's transparent margins (left +15, right
/// -13, top +20, bottom +7 relative to the player's bounds). The middle
/// band is a span test inflated by the radius; one radius above the top
/// edge and below the bottom edge the corners are tested as circles.
pub fn ball_player_collision(
    ball_pos: Vec2,
    radius: f32,
    player_pos: Vec2,
    player_size: Vec2,
) -> bool {
    let left = player_pos.x - player_size.x / 2.0 + 15.0;
    let right = player_pos.x + player_size.x / 2.0 - 13.0;
    let top = player_pos.y - player_size.y / 2.0 + 20.0;
    let bottom = player_pos.y + player_size.y / 2.0 + 7.0;

    let in_span = ball_pos.x >= left - radius && ball_pos.x <= right + radius;
    if ball_pos.y >= top && ball_pos.y <= bottom {
        in_span
    } else if ball_pos.y >= top - radius && ball_pos.y <= top {
        in_span
            && ((ball_pos.x >= left && ball_pos.x <= right)
                || within_radius(ball_pos, Vec2::new(left, top), radius)
                || within_radius(ball_pos, Vec2::new(right, top), radius))
    } else if ball_pos.y >= bottom && ball_pos.y <= bottom + radius {
        in_span
            && ((ball_pos.x >= left && ball_pos.x <= right)
                || within_radius(ball_pos, Vec2::new(left, bottom), radius)
                || within_radius(ball_pos, Vec2::new(right, bottom), radius))
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: Vec2 = Vec2::new(80.0, 110.0);

    #[test]
    fn rounded_barrier_direct_hit() {
        // Player at barrier height, horizontally overlapping
        assert!(rounded_barrier_collision(
            Vec2::new(200.0, 800.0),
            PLAYER,
            180.0,
            260.0,
            700.0
        ));
    }

    #[test]
    fn rounded_barrier_horizontal_miss() {
        assert!(!rounded_barrier_collision(
            Vec2::new(100.0, 800.0),
            PLAYER,
            180.0,
            260.0,
            700.0
        ));
    }

    #[test]
    fn rounded_barrier_cleared_overhead() {
        // Player far above the top band
        assert!(!rounded_barrier_collision(
            Vec2::new(220.0, 600.0),
            PLAYER,
            180.0,
            260.0,
            700.0
        ));
    }

    #[test]
    fn rounded_barrier_top_corner_graze_is_forgiven() {
        // In the top band, horizontally inside the slack span but outside
        // both the footprint and the corner circles
        let pos = Vec2::new(180.0 - 39.0, 700.0 - 39.0);
        assert!(!rounded_barrier_collision(pos, PLAYER, 180.0, 260.0, 700.0));
    }

    #[test]
    fn rounded_barrier_top_corner_inside_circle_hits() {
        // Within half player-width of the top-left corner
        let pos = Vec2::new(180.0 - 20.0, 700.0 - 20.0);
        assert!(rounded_barrier_collision(pos, PLAYER, 180.0, 260.0, 700.0));
    }

    #[test]
    fn box_barrier_is_strict() {
        // Same grazing position that the rounded test forgives is a hit
        // for the box test whenever the vertical span overlaps
        let pos = Vec2::new(180.0 - 39.0, 700.0 - 39.0);
        assert!(box_barrier_collision(pos, PLAYER, 180.0, 260.0, 700.0));
        // But a clean vertical miss is still a miss
        let above = Vec2::new(220.0, 700.0 - PLAYER.y / 2.0 - 1.0);
        assert!(!box_barrier_collision(above, PLAYER, 180.0, 260.0, 700.0));
    }

    #[test]
    fn ball_hits_body() {
        let player = Vec2::new(200.0, 840.0);
        // Ball level with the player's torso
        assert!(ball_player_collision(
            Vec2::new(240.0, 840.0),
            20.0,
            player,
            PLAYER
        ));
        // Ball well to the right
        assert!(!ball_player_collision(
            Vec2::new(400.0, 840.0),
            20.0,
            player,
            PLAYER
        ));
    }

    #[test]
    fn ball_above_head_uses_corner_circles() {
        let player = Vec2::new(200.0, 840.0);
        let top = 840.0 - PLAYER.y / 2.0 + 20.0;
        // Directly above the head, within one radius
        assert!(ball_player_collision(
            Vec2::new(200.0, top - 10.0),
            20.0,
            player,
            PLAYER
        ));
        // Diagonally off the top-right corner, outside the corner circle
        let right = 200.0 + PLAYER.x / 2.0 - 13.0;
        assert!(!ball_player_collision(
            Vec2::new(right + 16.0, top - 16.0),
            20.0,
            player,
            PLAYER
        ));
        // Same diagonal but close enough to the corner
        assert!(ball_player_collision(
            Vec2::new(right + 10.0, top - 10.0),
            20.0,
            player,
            PLAYER
        ));
    }

    #[test]
    fn ball_below_feet_band() {
        let player = Vec2::new(200.0, 840.0);
        let bottom = 840.0 + PLAYER.y / 2.0 + 7.0;
        assert!(ball_player_collision(
            Vec2::new(200.0, bottom + 10.0),
            20.0,
            player,
            PLAYER
        ));
        assert!(!ball_player_collision(
            Vec2::new(200.0, bottom + 21.0),
            20.0,
            player,
            PLAYER
        ));
    }
}
