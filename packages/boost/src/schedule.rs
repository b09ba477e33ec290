// Boost Schedule Logic

use boostswap_math::{lin_interpolate, MAX_BOOST, UNITY_BOOST};

use crate::types::{Boost, BoostError, BoostPhase, BoostSchedule};

/// Boost in effect at `now`.
///
/// Before the start anchor the start boost holds, after the end anchor the
/// end boost holds, and in between each side is interpolated and floored.
pub fn effective_boost(schedule: &BoostSchedule, now: u64) -> Boost {
    if now <= schedule.start_time {
        return schedule.start;
    }
    if now >= schedule.end_time {
        return schedule.end;
    }

    let elapsed = now - schedule.start_time;
    let duration = schedule.end_time - schedule.start_time;
    Boost::new(
        lin_interpolate(schedule.start.boost0, schedule.end.boost0, elapsed, duration),
        lin_interpolate(schedule.start.boost1, schedule.end.boost1, elapsed, duration),
    )
}

/// True while a transition has not reached its end anchor
pub fn is_changing(schedule: &BoostSchedule, now: u64) -> bool {
    now < schedule.end_time
}

/// A window whose anchors carry the same boost reports the boost it holds
pub fn phase(schedule: &BoostSchedule, now: u64) -> BoostPhase {
    if is_changing(schedule, now) && schedule.start != schedule.end {
        BoostPhase::Transitioning
    } else if effective_boost(schedule, now).is_unity() {
        BoostPhase::Unboosted
    } else {
        BoostPhase::Boosted
    }
}

/// Both sides must lie in [1, MAX_BOOST]
pub fn validate_boost(boost: &Boost) -> Result<(), BoostError> {
    let in_range = |b: u32| (UNITY_BOOST..=MAX_BOOST).contains(&b);
    if in_range(boost.boost0) && in_range(boost.boost1) {
        Ok(())
    } else {
        Err(BoostError::InvalidBoost)
    }
}

/// Start a transition from the boost in effect now towards `target`.
///
/// A running transition may be re-targeted, except back to (1, 1): the
/// pair only returns to the constant-product curve from a settled boost.
pub fn schedule_transition(
    schedule: &BoostSchedule,
    target: Boost,
    now: u64,
    window: u64,
) -> Result<BoostSchedule, BoostError> {
    validate_boost(&target)?;
    if target.is_unity() && is_changing(schedule, now) {
        return Err(BoostError::BoostAlreadyChanging);
    }

    let end_time = now.checked_add(window).ok_or(BoostError::InvalidBoost)?;
    Ok(BoostSchedule {
        start: effective_boost(schedule, now),
        end: target,
        start_time: now,
        end_time,
    })
}

/// Collapse a finished transition to (1, 1) into a settled unboosted schedule
pub fn settle_unboosted(schedule: &BoostSchedule, now: u64) -> Result<BoostSchedule, BoostError> {
    if is_changing(schedule, now) {
        return Err(BoostError::BoostAlreadyChanging);
    }
    if !effective_boost(schedule, now).is_unity() {
        return Err(BoostError::InvalidBoost);
    }
    Ok(BoostSchedule::unboosted(now))
}
