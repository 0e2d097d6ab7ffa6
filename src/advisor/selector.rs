//! Best-method selection over a method table.
//!
//! # Algorithm
//! One pass in table order, with a running maximum starting at zero:
//! - score above the maximum: method becomes the best, maximum moves up
//! - score equal to the maximum: method is recorded as the tie (`second`)
//! - score below: ignored
//!
//! The tie slot is only ever overwritten by a later tie. It is not cleared
//! when a later method takes over as best, so a stale tie survives:
//! scores `[50, 50, 80]` yield best = third, second = second.
//!
//! A zero score seen before any best equals the zero baseline, so it also
//! lands in the tie slot: `[0, 5]` yields best = second, second = first.

use std::fmt;

use crate::advisor::method::ControlMethod;
use crate::advisor::tier::ThroughputTier;

/// Outcome of a selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation<'a> {
    /// One method holds the top score.
    Single(&'a ControlMethod),
    /// A tie was detected during the scan.
    Tied {
        best: &'a ControlMethod,
        second: &'a ControlMethod,
    },
    /// No method scored above zero for the tier.
    None,
}

impl<'a> Recommendation<'a> {
    pub fn best(&self) -> Option<&'a ControlMethod> {
        match *self {
            Self::Single(best) | Self::Tied { best, .. } => Some(best),
            Self::None => None,
        }
    }

    pub fn second(&self) -> Option<&'a ControlMethod> {
        match *self {
            Self::Tied { second, .. } => Some(second),
            _ => None,
        }
    }

    /// Label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Single(_) => "single",
            Self::Tied { .. } => "tied",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Recommendation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(best) => write!(f, "{} is most efficient", best.name),
            Self::Tied { best, second } => {
                write!(f, "{} or {} is most efficient", best.name, second.name)
            }
            Self::None => f.write_str("No control method is most efficient"),
        }
    }
}

/// Pick the highest-scoring method for `tier`, flagging ties.
pub fn select_best(methods: &[ControlMethod], tier: ThroughputTier) -> Recommendation<'_> {
    let mut running_max = 0;
    let mut best = None;
    let mut second = None;

    for method in methods {
        let score = method.score(tier);
        if score > running_max {
            running_max = score;
            best = Some(method);
        } else if score == running_max {
            second = Some(method);
        }
    }

    match (best, second) {
        (Some(best), Some(second)) => Recommendation::Tied { best, second },
        (Some(best), None) => Recommendation::Single(best),
        (None, _) => Recommendation::None,
    }
}
