//! CSV loader for the launch records table
//!
//! Reads the fixed-schema launch table. Only four columns are used; any
//! other columns in the file are ignored.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{LoadError, LoadResult};
use super::types::{Dataset, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
];

/// Raw row as it appears in the file, before validation
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    // Some exports write the class as a float ("1.0")
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawRow {
    fn into_record(self, line: u64) -> LoadResult<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() {
            return Err(LoadError::InvalidRow {
                line,
                reason: format!("payload mass is not finite: {}", self.payload_mass_kg),
            });
        }

        let outcome = if self.class.fract() == 0.0 {
            Outcome::from_class(self.class as i64)
        } else {
            None
        }
        .ok_or_else(|| LoadError::InvalidRow {
            line,
            reason: format!("class must be 0 or 1, got {}", self.class),
        })?;

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version_category: self.booster_version_category,
        })
    }
}

impl Dataset {
    /// Load the launch table from a CSV file
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            min_payload = dataset.min_payload(),
            max_payload = dataset.max_payload(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load the launch table from any CSV byte source
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            let raw: RawRow =
                row.deserialize(Some(&headers))
                    .map_err(|e| LoadError::InvalidRow {
                        line,
                        reason: e.to_string(),
                    })?;

            records.push(raw.into_record(line)?);
        }

        tracing::debug!(records = records.len(), "Parsed launch records");

        Self::from_records(records)
    }

    /// Load the launch table from an in-memory CSV string
    pub fn from_csv_str(data: &str) -> LoadResult<Self> {
        Self::from_reader(data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,5300.0,F9 FT B1031.1,FT
5,6,CCAFS SLC-40,1,9600.0,F9 B4 B1041.1,B4
";

    #[test]
    fn test_load_sample() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();

        assert_eq!(dataset.len(), 6);
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);

        let first = &dataset.records()[0];
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_version_category, "v1.0");

        let last = &dataset.records()[5];
        assert_eq!(last.launch_site, "CCAFS SLC-40");
        assert_eq!(last.outcome, Outcome::Success);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 6);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Launch Site,class,Payload Mass (kg)
CCAFS LC-40,0,0.0";

        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, COL_BOOSTER_CATEGORY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_float_class_accepted() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1.0,2490.0,FT";

        let dataset = Dataset::from_csv_str(csv_data).unwrap();
        assert_eq!(dataset.records()[0].outcome, Outcome::Success);
    }

    #[test]
    fn test_invalid_class() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,2490.0,FT
KSC LC-39A,2,2490.0,FT";

        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { line: 3, .. }));
    }

    #[test]
    fn test_unparsable_payload() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,heavy,FT";

        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";

        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,2490.0";

        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
