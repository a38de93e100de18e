//! Assessment orchestrator.
//!
//! Walks the catalog in order, asks about every test in a relevant area,
//! and records exactly one outcome per visited test.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::areas::RelevantAreas;
use crate::catalog::Catalog;
use crate::console::Console;
use crate::error::PromptError;
use crate::model::{LiftSelection, Outcome};
use crate::plan::WarmupPlan;

/// The recorded answer for one visited test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// Catalog index of the test.
    pub row: usize,
    pub outcome: Outcome,
}

/// Answers for one run, in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct ResponseLog {
    responses: Vec<Response>,
}

impl ResponseLog {
    pub fn record(&mut self, row: usize, outcome: Outcome) {
        self.responses.push(Response { row, outcome });
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Catalog indices of failed tests, in failure order.
    pub fn failed(&self) -> Vec<usize> {
        self.responses
            .iter()
            .filter(|r| r.outcome == Outcome::Failed)
            .map(|r| r.row)
            .collect()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.responses
            .iter()
            .filter(|r| r.outcome == outcome)
            .count()
    }
}

/// Ask about every catalog row in a relevant area.
///
/// Rows outside `areas` are neither shown nor recorded. A catalog with no
/// relevant rows produces an empty log.
pub fn run_assessment<R: BufRead, W: Write>(
    catalog: &Catalog,
    areas: &RelevantAreas,
    console: &mut Console<R, W>,
) -> Result<ResponseLog, PromptError> {
    let mut log = ResponseLog::default();

    for (index, row) in catalog.relevant(areas) {
        let out = console.output();
        writeln!(out, "\n--- {}: {} ---", row.area, row.test)?;
        writeln!(out, "Description: {}", row.description)?;
        writeln!(out, "You fail if: {}", row.fail_criteria)?;

        let outcome = console.ask_outcome()?;
        tracing::debug!(row = index, area = %row.area, %outcome, "recorded outcome");
        log.record(index, outcome);
    }

    Ok(log)
}

/// What one complete run produced.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub lifts: LiftSelection,
    pub log: ResponseLog,
}

/// Run the whole questionnaire: select lifts, assess, print the warmup plan.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<SessionSummary> {
    let lifts = console.select_lifts()?;
    let areas = RelevantAreas::resolve(&lifts);

    let out = console.output();
    if lifts.is_empty() {
        writeln!(out, "\nSelected lifts: none")?;
    } else {
        writeln!(out, "\nSelected lifts: {lifts}")?;
    }
    writeln!(out, "\n=== POWERLIFTING MOBILITY ASSESSMENT ===\n")?;
    writeln!(
        out,
        "You'll be assessed on {} relevant areas for your selected lift(s).",
        areas.len()
    )?;
    writeln!(
        out,
        "Answer 'y' if you failed the test, 'n' if you passed, or 'skip' to skip a test.\n"
    )?;

    let log = run_assessment(catalog, &areas, console)?;
    tracing::info!(
        asked = log.len(),
        failed = log.count(Outcome::Failed),
        skipped = log.count(Outcome::Skipped),
        "assessment complete"
    );

    let plan = WarmupPlan::build(catalog, &log.failed(), &lifts);
    let out = console.output();
    write!(out, "{plan}")?;
    out.flush()?;

    Ok(SessionSummary { lifts, log })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lift, TestRow};
    use std::io::Cursor;

    fn row(area: &str, test: &str) -> TestRow {
        TestRow {
            area: area.into(),
            test: test.into(),
            description: format!("How to do {test}"),
            fail_criteria: format!("Cannot do {test}"),
            solution_1: Some("fix 1".into()),
            solution_2: Some("fix 2".into()),
            solution_3: Some("fix 3".into()),
            solution_4: Some("tip".into()),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            row("General Pain Assessment", "Pain Scan"),
            row("Bench Setup", "Arch Check"),
            row("Muscle Soreness", "Soreness Check"),
            row("Squat Pattern", "Overhead Squat"),
            row("CNS Fatigue", "Jump Check"),
            row("Deadlift Setup", "Start Position"),
        ])
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn only_relevant_rows_are_asked() {
        let lifts: LiftSelection = [Lift::Squat].into_iter().collect();
        let areas = RelevantAreas::resolve(&lifts);
        let mut c = console("n\nskip\nY\nn\n");

        let log = run_assessment(&catalog(), &areas, &mut c).unwrap();
        let rows: Vec<usize> = log.responses().iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 2, 3, 4]);
        assert_eq!(log.failed(), vec![3]);
        assert_eq!(log.count(Outcome::Skipped), 1);
        assert_eq!(log.count(Outcome::Passed), 2);

        let out = output_of(c);
        assert!(out.contains("--- Squat Pattern: Overhead Squat ---"));
        assert!(out.contains("Description: How to do Overhead Squat"));
        assert!(out.contains("You fail if: Cannot do Overhead Squat"));
        assert!(!out.contains("Arch Check"));
        assert!(!out.contains("Start Position"));
    }

    #[test]
    fn invalid_answer_does_not_advance() {
        let areas = RelevantAreas::resolve(&LiftSelection::new());
        let mut c = console("maybe\ny\nn\nn\n");

        let log = run_assessment(&catalog(), &areas, &mut c).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log.responses()[0], Response { row: 0, outcome: Outcome::Failed });

        let out = output_of(c);
        assert_eq!(out.matches("Did you fail this test?").count(), 4);
        assert_eq!(out.matches("--- ").count(), 3);
    }

    #[test]
    fn no_relevant_rows_means_no_prompts() {
        let catalog = Catalog::new(vec![row("Bench Setup", "Arch Check")]);
        let areas = RelevantAreas::resolve(&LiftSelection::new());
        let mut c = console("");

        let log = run_assessment(&catalog, &areas, &mut c).unwrap();
        assert!(log.is_empty());
        assert!(output_of(c).is_empty());
    }

    #[test]
    fn session_with_no_lifts_and_no_failures() {
        let mut c = console("n\nn\nn\nn\nn\nn\n");
        let summary = run_session(&catalog(), &mut c).unwrap();

        assert!(summary.lifts.is_empty());
        assert_eq!(summary.log.len(), 3);
        let out = output_of(c);
        assert!(out.contains("Selected lifts: none"));
        assert!(out.contains("assessed on 3 relevant areas"));
        assert!(out.contains("=== YOUR WARMUP PLAN ==="));
        assert!(!out.contains("Overhead Squat"));
    }

    #[test]
    fn session_squat_failure_builds_custom_plan() {
        // squat only; fail the squat pattern test
        let mut c = console("y\nn\nn\nn\nn\ny\nn\n");
        let summary = run_session(&catalog(), &mut c).unwrap();

        assert_eq!(summary.log.failed(), vec![3]);
        let out = output_of(c);
        assert!(out.contains("Selected lifts: squat"));
        assert!(out.contains("=== YOUR CUSTOMIZED WARMUP PLAN ==="));
        assert!(out.contains("- Squat Pattern (1 failed)"));
        assert!(out.contains("-- Squat Pattern: Overhead Squat --"));
        assert!(out.contains("3. Standard squat progression:"));
        assert!(out.contains("For squat:\n- Squat Pattern: tip"));
    }

    #[test]
    fn session_stops_when_input_closes() {
        let mut c = console("y\nn\n");
        let err = run_session(&catalog(), &mut c).unwrap_err();
        assert!(err.downcast_ref::<PromptError>().is_some());
    }
}
