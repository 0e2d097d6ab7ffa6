//! Volume aggregation and throughput tier classification.
//!
//! # Bands
//! ```text
//! total >= high           → High
//! medium <= total < high  → Medium
//! total < medium          → Low   (negative totals included)
//! ```
//!
//! Boundaries belong to the higher tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Throughput band derived from the total vehicle volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThroughputTier {
    High,
    Medium,
    Low,
}

impl ThroughputTier {
    /// All tiers, highest first.
    pub const ALL: [ThroughputTier; 3] = [Self::High, Self::Medium, Self::Low];

    /// Short key used in config files and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ThroughputTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High Throughput",
            Self::Medium => "Medium Throughput",
            Self::Low => "Low Throughput",
        };
        f.write_str(label)
    }
}

/// Lower bounds of the High and Medium bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Smallest total classified as High.
    pub high: i64,

    /// Smallest total classified as Medium.
    pub medium: i64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { high: 20, medium: 10 }
    }
}

impl TierThresholds {
    /// Classify a total volume against these thresholds.
    pub fn classify(&self, total: i64) -> ThroughputTier {
        if total >= self.high {
            ThroughputTier::High
        } else if total >= self.medium {
            ThroughputTier::Medium
        } else {
            ThroughputTier::Low
        }
    }
}

/// Classify a total volume with the default 20/10 thresholds.
pub fn classify(total: i64) -> ThroughputTier {
    TierThresholds::default().classify(total)
}

/// Sum the four directional counts.
///
/// No range checks: negative counts simply lower the total. Overflow wraps
/// so the sum stays defined for every input.
pub fn total_volume(north: i64, east: i64, south: i64, west: i64) -> i64 {
    north.wrapping_add(east).wrapping_add(south).wrapping_add(west)
}

/// Vehicle counts observed on each approach of an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalCounts {
    pub north: i64,
    pub east: i64,
    pub south: i64,
    pub west: i64,
}

impl DirectionalCounts {
    pub fn new(north: i64, east: i64, south: i64, west: i64) -> Self {
        Self { north, east, south, west }
    }

    pub fn total(&self) -> i64 {
        total_volume(self.north, self.east, self.south, self.west)
    }
}
