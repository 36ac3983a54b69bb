use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_BOOSTER_CATEGORY,
    COL_CLASS,
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that prevents the dataset from being loaded. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{column}' column")]
    MissingColumn { column: String },

    #[error("row {row}: invalid '{column}' value: {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse launch records from any CSV source.
///
/// The header row must name the four required columns; any other columns
/// (flight number, booster version, the unnamed pandas index…) are ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let raw = result?;
        records.push(raw.into_record(idx + 1)?);
    }

    LaunchDataset::from_records(records).ok_or(LoadError::Empty)
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: i64,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(LoadError::InvalidValue {
                row,
                column: COL_PAYLOAD_MASS,
                message: format!("{} is not a non-negative mass", self.payload_mass_kg),
            });
        }
        let outcome = Outcome::from_class(self.class).ok_or_else(|| LoadError::InvalidValue {
            row,
            column: COL_CLASS,
            message: format!("expected 0 or 1, got {}", self.class),
        })?;

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            booster_version_category: self.booster_version_category,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
5,6,CCAFS SLC-40,1,9600.0,F9 B5 B1046.2,B5
";

    #[test]
    fn loads_real_layout_and_ignores_extra_columns() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert_eq!(
            ds.launch_sites,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );

        let rec = &ds.records()[4];
        assert_eq!(rec.launch_site, "KSC LC-39A");
        assert_eq!(rec.payload_mass_kg, 2490.0);
        assert_eq!(rec.booster_version_category, "FT");
        assert_eq!(rec.outcome, Outcome::Success);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err}");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Launch Site,Payload Mass (kg),class\nA,100,1\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn { column } => assert_eq!(column, COL_BOOSTER_CATEGORY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn class_outside_zero_one_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\nA,100,FT,2\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidValue { row: 1, column: COL_CLASS, .. }),
            "{err}"
        );
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
                   A,100,FT,1\n\
                   A,-5,FT,1\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidValue { row: 2, column: COL_PAYLOAD_MASS, .. }),
            "{err}"
        );
    }

    #[test]
    fn non_numeric_payload_is_csv_error() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\nA,heavy,FT,1\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)), "{err}");
    }

    #[test]
    fn header_only_file_is_empty() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty), "{err}");
    }
}
