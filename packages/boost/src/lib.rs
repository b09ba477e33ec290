#![no_std]

pub mod types;
pub mod schedule;

pub use types::{Boost, BoostError, BoostPhase, BoostSchedule};
pub use schedule::{
    effective_boost, is_changing, phase, schedule_transition, settle_unboosted, validate_boost,
};
