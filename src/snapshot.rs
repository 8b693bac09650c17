//! Session save/restore with validation
//!
//! A snapshot is a versioned JSON envelope around the full [`Session`],
//! including the RNG stream, so a restored run continues bit-identically.
//! Where the bytes live (disk, LocalStorage, network) is the caller's
//! concern; this module only guarantees the data is sufficient to resume
//! and refuses to produce an inconsistent session from bad input.

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::sim::{Lane, Obstacle, Session};

/// Bumped whenever the session layout changes incompatibly
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    session: Session,
}

/// Serialize a session to resumable bytes
pub fn persist_snapshot(session: &Session) -> Result<Vec<u8>> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        session: session.clone(),
    };
    let bytes = serde_json::to_vec(&envelope).context("encoding snapshot")?;
    log::info!(
        "snapshot of session {:#018x} at {:.0}m ({} bytes)",
        session.id,
        session.distance,
        bytes.len()
    );
    Ok(bytes)
}

/// Rebuild a session from snapshot bytes.
///
/// Fails explicitly on unknown versions, malformed JSON, or structurally
/// invalid state so the caller can fall back to a fresh game instead of
/// resuming something inconsistent.
pub fn restore_snapshot(bytes: &[u8]) -> Result<Session> {
    let envelope: Envelope = serde_json::from_slice(bytes).context("decoding snapshot")?;
    if envelope.version != SNAPSHOT_VERSION {
        bail!(
            "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
            envelope.version
        );
    }
    validate(&envelope.session)?;
    log::info!(
        "restored session {:#018x} at {:.0}m",
        envelope.session.id,
        envelope.session.distance
    );
    Ok(envelope.session)
}

fn validate(session: &Session) -> Result<()> {
    ensure!(
        session.lanes.len() == session.mode.lane_count(),
        "lane count {} does not match {:?} mode",
        session.lanes.len(),
        session.mode
    );
    ensure!(
        session.distance.is_finite() && session.distance >= 0.0,
        "invalid distance {}",
        session.distance
    );
    for (index, lane) in session.lanes.iter().enumerate() {
        validate_lane(lane).with_context(|| format!("lane {index}"))?;
    }
    Ok(())
}

fn validate_lane(lane: &Lane) -> Result<()> {
    ensure!(
        lane.size.x > 0.0 && lane.size.y > 0.0,
        "non-positive lane size {:?}",
        lane.size
    );
    let player = &lane.player;
    ensure!(
        player.pos.x.is_finite() && player.pos.y.is_finite() && player.y_speed.is_finite(),
        "non-finite player state"
    );
    ensure!(
        player.width > 0.0 && player.height > 0.0,
        "non-positive player dimensions"
    );
    ensure!(
        player.lane_height == lane.size.y,
        "player ground line disagrees with lane height"
    );
    ensure!(
        player.pos.y <= player.ground(),
        "player below ground (y={}, ground={})",
        player.pos.y,
        player.ground()
    );
    for ob in &lane.obstacles {
        validate_obstacle(ob, lane)?;
    }
    Ok(())
}

fn validate_obstacle(ob: &Obstacle, lane: &Lane) -> Result<()> {
    let pos = ob.pos();
    ensure!(
        pos.x.is_finite() && pos.y.is_finite(),
        "non-finite {} position",
        ob.name()
    );
    ensure!(
        ob.width() > 0.0 && ob.x_speed() >= 0.0,
        "invalid {} geometry",
        ob.name()
    );
    if let Obstacle::Pinball(ball) = ob {
        ensure!(
            ball.restitution != 0.0 && ball.gravity.is_finite() && ball.y_speed.is_finite(),
            "invalid pinball physics"
        );
        ensure!(
            ball.lane_height == lane.size.y,
            "pinball floor disagrees with lane height"
        );
    }
    Ok(())
}

/// True when `bytes` is a snapshot of the given live session, i.e. resuming
/// it would not revive an older, already-finished run
pub fn snapshot_matches(bytes: &[u8], session: &Session) -> bool {
    restore_snapshot(bytes)
        .map(|saved| saved.id == session.id)
        .unwrap_or(false)
}
