//! Timestamp helpers shared by the issue lifecycle.
//!
//! Timestamps are stored as microseconds since the epoch, so every value
//! handed out here is already truncated to that precision.

use chrono::{DateTime, Duration, SubsecRound, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Returns `candidate` if it is later than `floor`, otherwise one
/// microsecond past `floor`.
pub fn strictly_after(candidate: DateTime<Utc>, floor: DateTime<Utc>) -> DateTime<Utc> {
    let candidate = candidate.trunc_subsecs(6);
    if candidate > floor {
        candidate
    } else {
        floor + Duration::microseconds(1)
    }
}
