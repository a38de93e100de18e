//! Compiled-in area tables and the relevant-area resolver.
//!
//! Which areas a lift depends on is fixed at build time. The catalog only
//! supplies the tests; it cannot add areas to a lift.

use std::collections::BTreeSet;

use crate::model::{Lift, LiftSelection};

/// Areas assessed no matter which lifts are selected.
pub const FUNDAMENTAL_AREAS: [&str; 3] = ["General Pain Assessment", "Muscle Soreness", "CNS Fatigue"];

const SQUAT_AREAS: &[&str] = &[
    "Ankle Mobility",
    "Hip Flexion",
    "Hip Internal Rotation",
    "Hip External Rotation",
    "Thoracic Extension",
    "Shoulder Internal Rotation",
    "Lat Flexibility",
    "Bracing Ability",
    "Anterior Core Control",
    "Hip Hinge Pattern",
    "Squat Pattern",
];

const BENCH_AREAS: &[&str] = &[
    "Shoulder External Rotation",
    "Shoulder Internal Rotation",
    "Thoracic Extension",
    "Lat Flexibility",
    "Wrist Mobility",
    "Bracing Ability",
    "Bench Setup",
];

const DEADLIFT_AREAS: &[&str] = &[
    "Hip Flexion",
    "Hamstring Flexibility",
    "Lat Flexibility",
    "Wrist Mobility",
    "Bracing Ability",
    "Anterior Core Control",
    "Hip Hinge Pattern",
    "Deadlift Setup",
];

impl Lift {
    /// Areas specific to this lift, in table order.
    pub fn specific_areas(self) -> &'static [&'static str] {
        match self {
            Lift::Squat => SQUAT_AREAS,
            Lift::Bench => BENCH_AREAS,
            Lift::Deadlift => DEADLIFT_AREAS,
        }
    }

    /// Whether `area` is one of this lift's specific areas.
    pub fn covers(self, area: &str) -> bool {
        self.specific_areas().contains(&area)
    }
}

/// Whether `area` is always assessed.
pub fn is_fundamental(area: &str) -> bool {
    FUNDAMENTAL_AREAS.contains(&area)
}

/// Whether `area` appears in any compiled-in table.
pub fn is_known(area: &str) -> bool {
    is_fundamental(area) || Lift::ALL.iter().any(|lift| lift.covers(area))
}

/// Every area named in the compiled-in tables: fundamentals first, then
/// lift-specific areas in first-seen order.
pub fn all_areas() -> Vec<&'static str> {
    let mut areas: Vec<&'static str> = FUNDAMENTAL_AREAS.to_vec();
    for lift in Lift::ALL {
        for area in lift.specific_areas() {
            if !areas.contains(area) {
                areas.push(area);
            }
        }
    }
    areas
}

/// The areas that will be assessed for a lift selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantAreas(BTreeSet<&'static str>);

impl RelevantAreas {
    /// Fundamental areas plus the specific areas of every selected lift.
    ///
    /// An empty selection yields the fundamental areas alone.
    pub fn resolve(selection: &LiftSelection) -> Self {
        let mut areas: BTreeSet<&'static str> = FUNDAMENTAL_AREAS.into_iter().collect();
        for lift in selection.iter() {
            areas.extend(lift.specific_areas().iter().copied());
        }
        tracing::debug!(lifts = %selection, count = areas.len(), "resolved relevant areas");
        Self(areas)
    }

    pub fn contains(&self, area: &str) -> bool {
        self.0.contains(area)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}
