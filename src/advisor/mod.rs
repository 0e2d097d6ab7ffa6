//! Traffic control decision logic.
//!
//! # Data Flow
//! ```text
//! DirectionalCounts
//!     → tier.rs (total_volume, classify)
//!     → method.rs (MethodTable lookup)
//!     → selector.rs (select_best)
//!     → Recommendation
//! ```
//!
//! # Design Decisions
//! - The method table is data, built once and shared read-only
//! - Every function here is total: any i64 counts produce an Advice

use std::io::{self, Write};

pub mod method;
pub mod selector;
pub mod tier;

pub use method::{ControlMethod, EfficiencyScores, MethodTable};
pub use selector::{select_best, Recommendation};
pub use tier::{classify, total_volume, DirectionalCounts, ThroughputTier, TierThresholds};

/// Counts used when the binary runs without arguments.
pub const EXAMPLE_COUNTS: DirectionalCounts = DirectionalCounts {
    north: 5,
    east: 5,
    south: 5,
    west: 0,
};

/// Evaluates counts against a fixed method table.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    table: MethodTable,
    thresholds: TierThresholds,
}

/// Full result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice<'a> {
    pub counts: DirectionalCounts,
    pub total: i64,
    pub tier: ThroughputTier,
    pub recommendation: Recommendation<'a>,
}

impl Advisor {
    pub fn new(table: MethodTable, thresholds: TierThresholds) -> Self {
        Self { table, thresholds }
    }

    pub fn table(&self) -> &MethodTable {
        &self.table
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Run the whole pipeline for one set of counts.
    pub fn advise(&self, counts: DirectionalCounts) -> Advice<'_> {
        let total = counts.total();
        let tier = self.thresholds.classify(total);
        let recommendation = select_best(self.table.methods(), tier);

        tracing::debug!(
            total,
            tier = %tier,
            outcome = recommendation.outcome(),
            "Counts evaluated"
        );

        Advice {
            counts,
            total,
            tier,
            recommendation,
        }
    }
}

/// Write the recommended method names one per line: the best, then the
/// tie if one was detected. Nothing is written when there is no
/// recommendation.
pub fn write_names<W: Write>(advice: &Advice<'_>, out: &mut W) -> io::Result<()> {
    if let Some(best) = advice.recommendation.best() {
        writeln!(out, "{}", best.name)?;
    }
    if let Some(second) = advice.recommendation.second() {
        writeln!(out, "{}", second.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_counts() {
        let advisor = Advisor::default();
        let advice = advisor.advise(EXAMPLE_COUNTS);

        assert_eq!(advice.total, 15);
        assert_eq!(advice.tier, ThroughputTier::Medium);
        assert_eq!(
            advice.recommendation.to_string(),
            "Roundabout or Traffic Lights is most efficient"
        );
    }

    #[test]
    fn test_custom_table() {
        let table = MethodTable::new(vec![
            ControlMethod::new("Roundabout", EfficiencyScores::new(10, 80, 90)),
            ControlMethod::new("Traffic Lights", EfficiencyScores::new(95, 60, 20)),
        ]);
        let advisor = Advisor::new(table, TierThresholds::default());

        let busy = advisor.advise(DirectionalCounts::new(10, 10, 10, 10));
        assert_eq!(busy.tier, ThroughputTier::High);
        assert_eq!(busy.recommendation.to_string(), "Traffic Lights is most efficient");

        let quiet = advisor.advise(DirectionalCounts::new(1, 1, -5, 0));
        assert_eq!(quiet.tier, ThroughputTier::Low);
        assert_eq!(quiet.recommendation.best().unwrap().name, "Roundabout");
    }

    fn names(advice: &Advice<'_>) -> String {
        let mut out = Vec::new();
        write_names(advice, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_names_example() {
        let advisor = Advisor::default();
        assert_eq!(names(&advisor.advise(EXAMPLE_COUNTS)), "Roundabout\nTraffic Lights\n");
    }

    #[test]
    fn test_write_names_single() {
        let table = MethodTable::new(vec![
            ControlMethod::new("Roundabout", EfficiencyScores::new(50, 75, 90)),
            ControlMethod::new("Stop Signs", EfficiencyScores::new(20, 30, 40)),
        ]);
        let advisor = Advisor::new(table, TierThresholds::default());
        assert_eq!(names(&advisor.advise(EXAMPLE_COUNTS)), "Roundabout\n");
    }

    #[test]
    fn test_write_names_none() {
        let table = MethodTable::new(vec![ControlMethod::new(
            "Flashing Amber",
            EfficiencyScores::new(0, 0, 0),
        )]);
        let advisor = Advisor::new(table, TierThresholds::default());
        let advice = advisor.advise(EXAMPLE_COUNTS);
        assert_eq!(advice.recommendation, Recommendation::None);
        assert_eq!(names(&advice), "");
    }

    #[test]
    fn test_advise_is_idempotent() {
        let advisor = Advisor::default();
        let counts = DirectionalCounts::new(7, 8, 9, 1);
        assert_eq!(advisor.advise(counts), advisor.advise(counts));
    }
}
