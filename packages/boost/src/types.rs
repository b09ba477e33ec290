// Boost Types

use boostswap_math::UNITY_BOOST;
use soroban_sdk::contracttype;

/// Curve amplification for each side of the pair.
///
/// `boost0` applies while reserve0 exceeds reserve1, `boost1` otherwise.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Boost {
    pub boost0: u32,
    pub boost1: u32,
}

impl Boost {
    pub fn new(boost0: u32, boost1: u32) -> Self {
        Self { boost0, boost1 }
    }

    /// (1, 1): the plain constant-product curve
    pub fn unity() -> Self {
        Self::new(UNITY_BOOST, UNITY_BOOST)
    }

    pub fn is_unity(&self) -> bool {
        self.boost0 == UNITY_BOOST && self.boost1 == UNITY_BOOST
    }
}

impl Default for Boost {
    fn default() -> Self {
        Self::unity()
    }
}

/// Anchors of a linear boost transition.
///
/// The boost in effect at any time is derived from these four values and
/// the ledger timestamp; nothing is written while a transition runs.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoostSchedule {
    /// Boost in effect at `start_time`
    pub start: Boost,
    /// Boost reached at `end_time` and held afterwards
    pub end: Boost,
    pub start_time: u64,
    pub end_time: u64,
}

impl BoostSchedule {
    /// A settled schedule sitting on the constant-product curve
    pub fn unboosted(now: u64) -> Self {
        Self {
            start: Boost::unity(),
            end: Boost::unity(),
            start_time: now,
            end_time: now,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoostPhase {
    Unboosted,
    Transitioning,
    Boosted,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoostError {
    /// A component outside [1, MAX_BOOST], or a boost that is not allowed here
    InvalidBoost,
    /// Another transition has not finished yet
    BoostAlreadyChanging,
}
