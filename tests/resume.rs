//! Snapshot resume must be indistinguishable from never having stopped.

use anyhow::Result;
use strider::sim::{GameMode, Session};
use strider::{persist_snapshot, restore_snapshot};

/// Scripted input: jump lane 0 every `period` ticks
fn drive(session: &mut Session, ticks: u32, period: u32, offset: u32) -> bool {
    for tick in 0..ticks {
        if (tick + offset) % period == 0 {
            session.input_jump(0);
            if session.lanes.len() > 1 {
                session.input_jump(1);
            }
        }
        if session.tick_headless() {
            return true;
        }
    }
    false
}

#[test]
fn resumed_session_replays_identically() -> Result<()> {
    for mode in [GameMode::Normal, GameMode::Hard] {
        let mut original = Session::new(0xDEAD_BEEF, mode);
        drive(&mut original, 700, 45, 0);

        let bytes = persist_snapshot(&original)?;
        let mut resumed = restore_snapshot(&bytes)?;

        // Continue both under identical input, comparing as we go
        let over_a = drive(&mut original, 2_000, 45, 700);
        let over_b = drive(&mut resumed, 2_000, 45, 700);

        assert_eq!(over_a, over_b, "collision outcomes diverged ({mode:?})");
        assert_eq!(original.distance, resumed.distance, "distance diverged ({mode:?})");
        // Full-state comparison via the snapshot encoding
        assert_eq!(
            persist_snapshot(&original)?,
            persist_snapshot(&resumed)?,
            "state diverged ({mode:?})"
        );
    }
    Ok(())
}

#[test]
fn restore_rejects_truncated_snapshots() -> Result<()> {
    let session = Session::new(3, GameMode::Normal);
    let bytes = persist_snapshot(&session)?;
    assert!(restore_snapshot(&bytes[..bytes.len() / 2]).is_err());
    Ok(())
}
