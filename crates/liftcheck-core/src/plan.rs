//! Warmup plan generation.
//!
//! Turns the failed tests of an assessment into a prioritized warmup: the
//! areas that failed most often, corrective exercises for the first few
//! failures, the standard bar progression for each lift, and per-lift
//! implementation tips.

use std::fmt;

use crate::catalog::Catalog;
use crate::model::{Lift, LiftSelection, TestRow};

/// Corrective-exercise blocks shown at most, in failure order.
pub const MAX_CORRECTIVE_BLOCKS: usize = 5;

const CARDIO: &str = "5-10 minutes of light cardio (rowing, cycling, or jumping jacks)";

/// Standard bar-weight progression, identical for every lift.
pub const PROGRESSION: [&str; 5] = [
    "Empty bar: 10-15 reps",
    "40% of working weight: 8-10 reps",
    "60% of working weight: 5-8 reps",
    "75% of working weight: 3-5 reps",
    "85-90% of working weight: 1-2 reps (optional)",
];

/// How many failed tests fell in one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCount<'a> {
    pub area: &'a str,
    pub failures: usize,
}

/// An implementation tip taken from a failed test's fourth solution slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip<'a> {
    pub area: &'a str,
    pub advice: &'a str,
}

/// A warmup plan derived from the failed tests of one run.
#[derive(Debug, Clone)]
pub struct WarmupPlan<'a> {
    lifts: LiftSelection,
    top_issues: Vec<AreaCount<'a>>,
    corrective: Vec<&'a TestRow>,
    tips: Vec<(Lift, Vec<Tip<'a>>)>,
}

impl<'a> WarmupPlan<'a> {
    /// Build a plan from the catalog indices of the failed tests, in the
    /// order they were failed.
    pub fn build(catalog: &'a Catalog, failed: &[usize], lifts: &LiftSelection) -> Self {
        let failed_rows: Vec<&'a TestRow> = failed.iter().filter_map(|&i| catalog.get(i)).collect();

        let top_issues = rank_areas(&failed_rows);

        let corrective = failed_rows
            .iter()
            .take(MAX_CORRECTIVE_BLOCKS)
            .copied()
            .collect();

        // A tip goes to every selected lift that lists the area, so shared
        // areas repeat under each lift.
        let tips = lifts
            .iter()
            .map(|lift| {
                let tips: Vec<Tip<'a>> = failed_rows
                    .iter()
                    .filter(|row| lift.covers(&row.area))
                    .filter_map(|&row| {
                        row.implementation_tip().map(|advice| Tip {
                            area: &row.area,
                            advice,
                        })
                    })
                    .collect();
                (lift, tips)
            })
            .filter(|(_, tips)| !tips.is_empty())
            .collect();

        tracing::debug!(
            failed = failed_rows.len(),
            areas = top_issues.len(),
            "built warmup plan"
        );

        Self {
            lifts: lifts.clone(),
            top_issues,
            corrective,
            tips,
        }
    }

    /// `false` when nothing failed and the generic routine applies.
    pub fn is_customized(&self) -> bool {
        !self.top_issues.is_empty()
    }

    /// Failed areas, most failures first; ties keep first-failure order.
    pub fn top_issues(&self) -> &[AreaCount<'a>] {
        &self.top_issues
    }

    /// Tests that get a corrective-exercise block.
    pub fn corrective(&self) -> &[&'a TestRow] {
        &self.corrective
    }

    /// Implementation tips grouped by lift; lifts without tips are absent.
    pub fn tips(&self) -> &[(Lift, Vec<Tip<'a>>)] {
        &self.tips
    }

    fn write_progressions(&self, f: &mut fmt::Formatter<'_>, step: u32) -> fmt::Result {
        for lift in self.lifts.iter() {
            writeln!(f, "\n{step}. Standard {lift} progression:")?;
            for line in PROGRESSION {
                writeln!(f, "   - {line}")?;
            }
        }
        Ok(())
    }

    fn write_generic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== YOUR WARMUP PLAN ===\n")?;
        writeln!(
            f,
            "Congratulations! You passed all tests. Here's a basic warmup routine:"
        )?;
        writeln!(f, "1. {CARDIO}")?;
        self.write_progressions(f, 2)
    }

    fn write_customized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== YOUR CUSTOMIZED WARMUP PLAN ===\n")?;
        writeln!(
            f,
            "Based on your assessment, here's your personalized warmup routine:"
        )?;
        writeln!(f, "\n1. Start with {CARDIO}")?;
        writeln!(f, "\n2. Targeted mobility/stability work:")?;

        writeln!(f, "\nYour top issues are in these areas (prioritized):")?;
        for issue in &self.top_issues {
            writeln!(f, "- {} ({} failed)", issue.area, issue.failures)?;
        }

        writeln!(f, "\nPerform these corrective exercises:")?;
        for row in &self.corrective {
            writeln!(f, "\n-- {}: {} --", row.area, row.test)?;
            for (slot, solution) in row.corrective_solutions() {
                if let Some(solution) = solution {
                    writeln!(f, "  {slot}. {solution}")?;
                }
            }
        }

        self.write_progressions(f, 3)?;

        writeln!(f, "\n=== IMPLEMENTATION NOTES ===")?;
        if self.lifts.is_empty() {
            writeln!(f, "For your session today, consider these adjustments:")?;
        } else {
            writeln!(
                f,
                "For your {} today, consider these adjustments:",
                self.lifts
            )?;
        }
        for (lift, tips) in &self.tips {
            writeln!(f, "\nFor {lift}:")?;
            for tip in tips {
                writeln!(f, "- {}: {}", tip.area, tip.advice)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for WarmupPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_customized() {
            self.write_customized(f)
        } else {
            self.write_generic(f)
        }
    }
}

/// Count failures per area and order by count, descending. The sort is
/// stable, so equal counts keep the order in which areas first failed.
fn rank_areas<'a>(failed_rows: &[&'a TestRow]) -> Vec<AreaCount<'a>> {
    let mut counts: Vec<AreaCount<'a>> = Vec::new();
    for &row in failed_rows {
        match counts.iter_mut().find(|c| c.area == row.area) {
            Some(count) => count.failures += 1,
            None => counts.push(AreaCount {
                area: &row.area,
                failures: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.failures.cmp(&a.failures));
    counts
}
