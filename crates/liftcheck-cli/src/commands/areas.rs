//! The `liftcheck areas` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use liftcheck_core::areas::{self, RelevantAreas};
use liftcheck_core::model::{Lift, LiftSelection};

pub fn execute(lifts: Vec<Lift>) -> Result<()> {
    let selection: LiftSelection = if lifts.is_empty() {
        Lift::ALL.into_iter().collect()
    } else {
        lifts.into_iter().collect()
    };
    let relevant = RelevantAreas::resolve(&selection);

    let mut table = Table::new();
    table.set_header(vec!["Area", "Assessed", "Source"]);

    for area in areas::all_areas() {
        let source = if areas::is_fundamental(area) {
            "fundamental".to_string()
        } else {
            Lift::ALL
                .iter()
                .filter(|lift| lift.covers(area))
                .map(|lift| lift.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            Cell::new(area),
            Cell::new(if relevant.contains(area) { "yes" } else { "no" }),
            Cell::new(source),
        ]);
    }

    println!("Lifts: {selection}");
    println!("{table}");
    println!("{} of {} areas assessed.", relevant.len(), areas::all_areas().len());

    Ok(())
}
