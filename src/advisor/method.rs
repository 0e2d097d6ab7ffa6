//! Control methods and their per-tier efficiency scores.

use serde::{Deserialize, Serialize};

use crate::advisor::tier::ThroughputTier;

/// Efficiency score for each throughput tier.
///
/// A missing entry reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct EfficiencyScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<u32>,
}

impl EfficiencyScores {
    pub fn new(high: u32, medium: u32, low: u32) -> Self {
        Self {
            high: Some(high),
            medium: Some(medium),
            low: Some(low),
        }
    }

    /// Raw table entry for a tier, if defined.
    pub fn entry(&self, tier: ThroughputTier) -> Option<u32> {
        match tier {
            ThroughputTier::High => self.high,
            ThroughputTier::Medium => self.medium,
            ThroughputTier::Low => self.low,
        }
    }

    pub fn get(&self, tier: ThroughputTier) -> u32 {
        self.entry(tier).unwrap_or(0)
    }
}

/// A traffic control method (roundabout, stop signs, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControlMethod {
    /// Display name, used verbatim in recommendations.
    pub name: String,

    /// Scores by tier.
    pub efficiency: EfficiencyScores,
}

impl ControlMethod {
    pub fn new(name: impl Into<String>, efficiency: EfficiencyScores) -> Self {
        Self {
            name: name.into(),
            efficiency,
        }
    }

    pub fn score(&self, tier: ThroughputTier) -> u32 {
        self.efficiency.get(tier)
    }
}

/// Ordered, read-only list of control methods.
///
/// Order matters: the selector scans in table order and the first method to
/// reach the maximum wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTable {
    methods: Vec<ControlMethod>,
}

impl MethodTable {
    pub fn new(methods: Vec<ControlMethod>) -> Self {
        Self { methods }
    }

    /// Roundabout, Stop Signs, Traffic Lights with the stock scores.
    pub fn canonical() -> Self {
        Self::new(canonical_methods())
    }

    pub fn methods(&self) -> &[ControlMethod] {
        &self.methods
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::canonical()
    }
}

/// The stock efficiency table.
pub fn canonical_methods() -> Vec<ControlMethod> {
    vec![
        ControlMethod::new("Roundabout", EfficiencyScores::new(50, 75, 90)),
        ControlMethod::new("Stop Signs", EfficiencyScores::new(20, 30, 40)),
        ControlMethod::new("Traffic Lights", EfficiencyScores::new(50, 75, 90)),
    ]
}
