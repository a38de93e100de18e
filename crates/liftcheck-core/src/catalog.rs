//! CSV test catalog loader.
//!
//! Loads the ordered list of mobility tests and validates it against the
//! compiled-in area tables.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::areas::{self, RelevantAreas};
use crate::error::CatalogError;
use crate::model::TestRow;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "powerlifting-warmup-assessment.csv";

/// Header columns every catalog must carry, in the bundled file's order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Area",
    "Test",
    "Test_Description",
    "Fail_Criteria",
    "Solution_1",
    "Solution_2",
    "Solution_3",
    "Solution_4",
];

/// The ordered, read-only list of tests for one run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<TestRow>,
}

impl Catalog {
    pub fn new(rows: Vec<TestRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TestRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&TestRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose area is relevant, paired with their catalog index, in catalog order.
    pub fn relevant<'a>(
        &'a self,
        areas: &'a RelevantAreas,
    ) -> impl Iterator<Item = (usize, &'a TestRow)> + 'a {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| areas.contains(&row.area))
    }
}

/// Load a catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(file, path)?;
    tracing::info!(path = %path.display(), rows = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse CSV from any reader into a `Catalog` (useful for testing).
///
/// Every column in [`REQUIRED_COLUMNS`] must be present in the header; extra
/// columns are ignored. Empty solution cells become `None`.
pub fn parse_catalog<R: Read>(reader: R, source_path: &Path) -> Result<Catalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(|source| CatalogError::Parse {
        path: source_path.to_path_buf(),
        source,
    })?;
    // Optional solution fields would otherwise deserialize as `None`
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(CatalogError::MissingColumn {
            path: source_path.to_path_buf(),
            column: (*column).to_string(),
        });
    }

    let rows = reader
        .deserialize::<TestRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CatalogError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;

    Ok(Catalog::new(rows))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based catalog row (if applicable).
    pub row: Option<usize>,
    /// Warning message.
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {}: {}", row + 1, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Validate a catalog for rows that can never be asked or render badly.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            row: None,
            message: "catalog has no tests".into(),
        });
        return warnings;
    }

    // Check for areas no lift selection can reach
    for (i, row) in catalog.rows().iter().enumerate() {
        if !areas::is_known(&row.area) {
            warnings.push(ValidationWarning {
                row: Some(i),
                message: format!("area '{}' is not assessed for any lift", row.area),
            });
        }
    }

    // Check for empty test names
    for (i, row) in catalog.rows().iter().enumerate() {
        if row.test.is_empty() {
            warnings.push(ValidationWarning {
                row: Some(i),
                message: "test name is empty".into(),
            });
        }
    }

    // Check for missing corrective exercises
    for (i, row) in catalog.rows().iter().enumerate() {
        for (slot, solution) in row.corrective_solutions() {
            if solution.is_none() {
                warnings.push(ValidationWarning {
                    row: Some(i),
                    message: format!("'{}' has no Solution_{slot}", row.test),
                });
            }
        }
    }

    // Check for duplicate (area, test) pairs
    let mut seen = HashSet::new();
    for (i, row) in catalog.rows().iter().enumerate() {
        if !seen.insert((row.area.as_str(), row.test.as_str())) {
            warnings.push(ValidationWarning {
                row: Some(i),
                message: format!("duplicate test '{}: {}'", row.area, row.test),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lift, LiftSelection};
    use std::path::PathBuf;

    const VALID_CSV: &str = "\
Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4
General Pain Assessment,Pain Scan,Move through the lifts,Sharp pain,Reduce load,Swap movement,Extra ROM work,Stop if worse
Ankle Mobility,Knee-to-Wall,\"Half kneel, drive knee forward\",Heel lifts,Band distraction,Knee rocks,Calf roll,Wear lifting shoes
Bench Setup,Arch Check,Set an arch,Cannot retract,Retraction drill,Bridges,Arch hold,
";

    fn parse(csv: &str) -> Result<Catalog, CatalogError> {
        parse_catalog(csv.as_bytes(), &PathBuf::from("test.csv"))
    }

    #[test]
    fn parse_valid_csv() {
        let catalog = parse(VALID_CSV).unwrap();
        assert_eq!(catalog.len(), 3);
        let ankle = catalog.get(1).unwrap();
        assert_eq!(ankle.area, "Ankle Mobility");
        assert_eq!(ankle.description, "Half kneel, drive knee forward");
        assert_eq!(ankle.solution_1.as_deref(), Some("Band distraction"));
        assert_eq!(ankle.implementation_tip(), Some("Wear lifting shoes"));
        assert!(catalog.get(2).unwrap().solution_4.is_none());
    }

    #[test]
    fn parse_missing_column_fails() {
        let csv = "Area,Test,Test_Description\nHip Flexion,Knee to Chest,Lie down\n";
        let err = parse(csv).unwrap_err();
        assert!(
            matches!(err, CatalogError::MissingColumn { ref column, .. } if column == "Fail_Criteria")
        );
    }

    #[test]
    fn missing_solution_column_fails() {
        for dropped in ["Solution_1", "Solution_2", "Solution_3", "Solution_4"] {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .collect();
            let csv = format!(
                "{}\nHip Flexion,Knee to Chest,Lie down,Cannot reach,a,b,c\n",
                header.join(",")
            );

            let err = parse(&csv).unwrap_err();
            assert!(
                matches!(err, CatalogError::MissingColumn { ref column, .. } if column == dropped),
                "dropping {dropped} gave {err:?}"
            );
            assert!(err.to_string().contains(dropped));
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4,Notes
Hip Flexion,Knee to Chest,a,b,c,d,e,f,coach note
";
        let catalog = parse(csv).unwrap();
        assert_eq!(catalog.get(0).unwrap().implementation_tip(), Some("f"));
    }

    #[test]
    fn parse_ragged_row_fails() {
        let csv = "\
Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4
Hip Flexion,Knee to Chest
";
        assert!(parse(csv).is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_catalog(Path::new("no-such-catalog.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("no-such-catalog.csv"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CATALOG_PATH);
        std::fs::write(&path, VALID_CSV).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn relevant_rows_follow_catalog_order() {
        let catalog = parse(VALID_CSV).unwrap();

        let none = RelevantAreas::resolve(&LiftSelection::new());
        let indices: Vec<usize> = catalog.relevant(&none).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0]);

        let squat: LiftSelection = [Lift::Squat].into_iter().collect();
        let areas = RelevantAreas::resolve(&squat);
        let indices: Vec<usize> = catalog.relevant(&areas).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn validate_flags_unknown_area_and_missing_solution() {
        let csv = "\
Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4
Neck Mobility,Chin Tuck,Tuck chin,Cannot tuck,Tucks,,Stretch,
";
        let catalog = parse(csv).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("not assessed")));
        assert!(warnings.iter().any(|w| w.message.contains("Solution_2")));
        assert!(!warnings.iter().any(|w| w.message.contains("Solution_4")));
    }

    #[test]
    fn validate_duplicates() {
        let csv = "\
Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4
Hip Flexion,Knee to Chest,a,b,c,d,e,f
Hip Flexion,Knee to Chest,a,b,c,d,e,f
";
        let catalog = parse(csv).unwrap();
        let warnings = validate_catalog(&catalog);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, Some(1));
        assert!(warnings[0].message.contains("duplicate"));
    }

    #[test]
    fn validate_empty_catalog() {
        let csv = "Area,Test,Test_Description,Fail_Criteria,Solution_1,Solution_2,Solution_3,Solution_4\n";
        let catalog = parse(csv).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings[0].message.contains("no tests"));
    }

    #[test]
    fn valid_catalog_has_no_warnings() {
        let catalog = parse(VALID_CSV).unwrap();
        assert!(validate_catalog(&catalog).is_empty());
    }
}
