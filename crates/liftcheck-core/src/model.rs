//! Core data model types for liftcheck.
//!
//! Catalog rows, the three competition lifts, and the outcome of a single
//! test as reported by the user.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One mobility test from the catalog.
///
/// Solution slots 1-3 hold corrective exercises. Slot 4 holds an
/// implementation tip for the working sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestRow {
    /// Mobility or stability area the test belongs to.
    #[serde(rename = "Area")]
    pub area: String,
    /// Name of the test.
    #[serde(rename = "Test")]
    pub test: String,
    /// How to perform the test.
    #[serde(rename = "Test_Description")]
    pub description: String,
    /// What counts as failing.
    #[serde(rename = "Fail_Criteria")]
    pub fail_criteria: String,
    #[serde(rename = "Solution_1")]
    pub solution_1: Option<String>,
    #[serde(rename = "Solution_2")]
    pub solution_2: Option<String>,
    #[serde(rename = "Solution_3")]
    pub solution_3: Option<String>,
    #[serde(rename = "Solution_4")]
    pub solution_4: Option<String>,
}

impl TestRow {
    /// The corrective exercises in slots 1-3, paired with their slot number.
    ///
    /// Missing slots are yielded as `None` so callers can keep numbering stable.
    pub fn corrective_solutions(&self) -> [(usize, Option<&str>); 3] {
        [
            (1, self.solution_1.as_deref()),
            (2, self.solution_2.as_deref()),
            (3, self.solution_3.as_deref()),
        ]
    }

    /// The implementation tip in slot 4, if present.
    pub fn implementation_tip(&self) -> Option<&str> {
        self.solution_4.as_deref()
    }
}

/// A competition lift the user may be training today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    /// All lifts in prompt order.
    pub const ALL: [Lift; 3] = [Lift::Squat, Lift::Bench, Lift::Deadlift];

    /// Capitalized name used in the selection prompt.
    pub fn title(self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Bench",
            Lift::Deadlift => "Deadlift",
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lift::Squat => write!(f, "squat"),
            Lift::Bench => write!(f, "bench"),
            Lift::Deadlift => write!(f, "deadlift"),
        }
    }
}

impl FromStr for Lift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Lift::Squat),
            "bench" | "bench press" => Ok(Lift::Bench),
            "deadlift" => Ok(Lift::Deadlift),
            other => Err(format!("unknown lift: {other}")),
        }
    }
}

/// The set of lifts chosen for today, always iterated squat, bench, deadlift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiftSelection(BTreeSet<Lift>);

impl LiftSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lift: Lift) {
        self.0.insert(lift);
    }

    pub fn contains(&self, lift: Lift) -> bool {
        self.0.contains(&lift)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Lift> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Lift> for LiftSelection {
    fn from_iter<I: IntoIterator<Item = Lift>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for LiftSelection {
    /// Comma-separated lift names, e.g. `squat, deadlift`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// What the user reported for a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failed,
    Passed,
    Skipped,
}

impl FromStr for Outcome {
    type Err = String;

    /// Parses an answer to "Did you fail this test?", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" => Ok(Outcome::Failed),
            "n" => Ok(Outcome::Passed),
            "skip" => Ok(Outcome::Skipped),
            other => Err(format!("invalid response: {other}")),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failed => write!(f, "failed"),
            Outcome::Passed => write!(f, "passed"),
            Outcome::Skipped => write!(f, "skipped"),
        }
    }
}
