//! The fixed monthly sales table.
//!
//! The dataset ships embedded in the binary as the CSV the dashboard was
//! built around, and is parsed into typed records once at startup. An
//! external CSV file with the same columns can be substituted at load time;
//! it goes through the same coercion and validation.

use std::io::Read;
use std::path::Path;

use sales_core::error::{DashboardError, Result};
use sales_core::models::MonthlyRecord;
use tracing::debug;

/// Number of records in a valid dataset: one per calendar month.
pub const MONTH_COUNT: usize = 12;

/// The 2024 monthly sales figures, verbatim from the source data.
const EMBEDDED_CSV: &str = "\
월,매출액,전년동월,증감률
01월,12000000,10500000,14.3
02월,13500000,11200000,20.5
03월,11000000,12800000,-14.1
04월,18000000,15200000,18.4
05월,21000000,18500000,13.5
06월,24000000,20100000,19.4
07월,22500000,19000000,18.4
08월,23000000,20500000,12.2
09월,19500000,18000000,8.3
10월,25000000,21500000,16.3
11월,26500000,23000000,15.2
12월,28000000,25000000,12.0
";

/// The ordered, immutable table of twelve monthly sales records.
///
/// Constructed once at process start and shared read-only thereafter;
/// insertion order is calendar order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDataSet {
    records: Vec<MonthlyRecord>,
}

impl SalesDataSet {
    /// Parse the embedded CSV into a validated dataset.
    ///
    /// Fails with [`DashboardError::DataFormat`] if any field cannot be
    /// coerced to its semantic type. Defensive for the embedded data, load
    /// bearing when the source is an external file.
    pub fn load() -> Result<Self> {
        let dataset = Self::from_reader(EMBEDDED_CSV.as_bytes())?;
        debug!(records = dataset.len(), "loaded embedded sales data");
        Ok(dataset)
    }

    /// Load and validate a dataset from a CSV file with the same columns as
    /// the embedded data.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| DashboardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(
            records = dataset.len(),
            path = %path.display(),
            "loaded sales data from file"
        );
        Ok(dataset)
    }

    /// The month labels in calendar order, used to populate the filter
    /// control alongside the "전체" option.
    pub fn month_labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.month.clone()).collect()
    }

    /// The records in calendar order.
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    /// Number of records (always [`MONTH_COUNT`] for a validated dataset).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records. Never true after validation.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Parse CSV from any reader, coercing each row and validating the table
    /// shape.
    fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut records: Vec<MonthlyRecord> = Vec::with_capacity(MONTH_COUNT);
        for (index, row) in csv_reader.deserialize::<MonthlyRecord>().enumerate() {
            let record = row.map_err(|e| {
                DashboardError::DataFormat(format!("row {}: {}", index + 1, e))
            })?;
            records.push(record);
        }

        validate(&records)?;
        Ok(Self { records })
    }
}

/// Check the table shape: exactly twelve records whose month labels are
/// `01월..12월` in calendar order.
fn validate(records: &[MonthlyRecord]) -> Result<()> {
    if records.len() != MONTH_COUNT {
        return Err(DashboardError::DataFormat(format!(
            "expected {} records, found {}",
            MONTH_COUNT,
            records.len()
        )));
    }

    for (index, record) in records.iter().enumerate() {
        let expected = format!("{:02}월", index + 1);
        if record.month != expected {
            return Err(DashboardError::DataFormat(format!(
                "row {}: expected month {}, found {}",
                index + 1,
                expected,
                record.month
            )));
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── load (embedded) ──────────────────────────────────────────────────────

    #[test]
    fn test_load_embedded_has_twelve_records() {
        let dataset = SalesDataSet::load().expect("embedded data must load");
        assert_eq!(dataset.len(), MONTH_COUNT);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_load_embedded_first_and_last_rows() {
        let dataset = SalesDataSet::load().unwrap();
        let records = dataset.records();

        assert_eq!(records[0].month, "01월");
        assert_eq!(records[0].revenue, 12_000_000);
        assert_eq!(records[0].prior_year_revenue, 10_500_000);
        assert!((records[0].growth_rate - 14.3).abs() < f64::EPSILON);

        assert_eq!(records[11].month, "12월");
        assert_eq!(records[11].revenue, 28_000_000);
        assert_eq!(records[11].prior_year_revenue, 25_000_000);
        assert!((records[11].growth_rate - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_embedded_negative_growth_row() {
        let dataset = SalesDataSet::load().unwrap();
        let march = &dataset.records()[2];
        assert_eq!(march.month, "03월");
        assert_eq!(march.revenue, 11_000_000);
        assert!((march.growth_rate - (-14.1)).abs() < f64::EPSILON);
    }

    // ── month_labels ─────────────────────────────────────────────────────────

    #[test]
    fn test_month_labels_calendar_order() {
        let dataset = SalesDataSet::load().unwrap();
        let labels = dataset.month_labels();
        let expected: Vec<String> = (1..=12).map(|m| format!("{:02}월", m)).collect();
        assert_eq!(labels, expected);
    }

    // ── from_reader validation ───────────────────────────────────────────────

    #[test]
    fn test_non_numeric_revenue_is_data_format_error() {
        let csv = "월,매출액,전년동월,증감률\n01월,abc,10500000,14.3\n";
        let err = SalesDataSet::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::DataFormat(msg) => {
                assert!(msg.contains("row 1"), "message was: {msg}")
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_revenue_is_data_format_error() {
        // Revenue is a non-negative integer; a sign must not coerce.
        let csv = "월,매출액,전년동월,증감률\n01월,-12000000,10500000,14.3\n";
        let err = SalesDataSet::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::DataFormat(_)), "got {err:?}");
    }

    #[test]
    fn test_non_numeric_growth_rate_is_data_format_error() {
        let csv = "월,매출액,전년동월,증감률\n01월,12000000,10500000,high\n";
        let err = SalesDataSet::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::DataFormat(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_rows_is_data_format_error() {
        let csv = "월,매출액,전년동월,증감률\n01월,12000000,10500000,14.3\n";
        let err = SalesDataSet::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::DataFormat(msg) => {
                assert!(msg.contains("expected 12 records"), "message was: {msg}")
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_order_months_is_data_format_error() {
        // Swap January and February.
        let csv = EMBEDDED_CSV
            .replacen("01월", "XX월", 1)
            .replacen("02월", "01월", 1)
            .replacen("XX월", "02월", 1);
        let err = SalesDataSet::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::DataFormat(msg) => {
                assert!(msg.contains("expected month"), "message was: {msg}")
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    // ── load_from_path ───────────────────────────────────────────────────────

    #[test]
    fn test_load_from_path_round_trip() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("sales.csv");
        std::fs::write(&path, EMBEDDED_CSV).expect("write csv");

        let from_file = SalesDataSet::load_from_path(&path).expect("file data must load");
        let embedded = SalesDataSet::load().unwrap();
        assert_eq!(from_file, embedded);
    }

    #[test]
    fn test_load_from_missing_path_is_file_read_error() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("does-not-exist.csv");
        let err = SalesDataSet::load_from_path(&path).unwrap_err();
        assert!(matches!(err, DashboardError::FileRead { .. }), "got {err:?}");
    }
}
