//! Property tests for the simulation's standing invariants.

use proptest::prelude::*;
use strider::sim::{GameMode, LanePhase, Obstacle, Session};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The player never sinks below the ground line, no matter how jumps
    /// are timed.
    #[test]
    fn player_stays_on_or_above_ground(
        seed in any::<u64>(),
        jump_period in 1u32..120,
        cheat in any::<bool>(),
    ) {
        let mut session = Session::new(seed, GameMode::Normal);
        if cheat {
            session.input_toggle_cheat(None);
        }
        for tick in 0..3_000u32 {
            if tick % jump_period == 0 {
                session.input_jump(0);
            }
            let over = session.tick_headless();
            let player = &session.lanes[0].player;
            prop_assert!(
                player.pos.y <= player.ground(),
                "tick {}: y={} ground={}",
                tick,
                player.pos.y,
                player.ground()
            );
            if over {
                break;
            }
        }
    }

    /// Pinballs respect the floor, pruning is never late, and no tick
    /// spawns more than one obstacle.
    #[test]
    fn obstacle_invariants_hold_for_whole_runs(seed in any::<u64>()) {
        let mut session = Session::new(seed, GameMode::Normal);
        // Cheat-spam jumps to survive long enough to reach pinball territory
        session.input_toggle_cheat(None);
        let mut prev_count = 0usize;
        for tick in 0..60_000u32 {
            session.input_jump(0);
            let over = session.tick_headless();
            let lane = &session.lanes[0];

            prop_assert!(
                lane.obstacles.len() <= prev_count + 1,
                "tick {}: {} spawns in one tick",
                tick,
                lane.obstacles.len() - prev_count
            );

            for ob in &lane.obstacles {
                prop_assert!(ob.pos().x >= -ob.width(), "unpruned off-screen obstacle");
                if let Obstacle::Pinball(ball) = ob {
                    prop_assert!(
                        ball.pos.y <= ball.floor(),
                        "tick {}: pinball below floor",
                        tick
                    );
                }
            }

            if over {
                prop_assert_eq!(session.lanes[0].phase, LanePhase::Collided);
                break;
            }
            prev_count = session.lanes[0].obstacles.len();
        }
    }
}
