//! CSV export of the accumulated projection

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::TrackerResult;
use crate::projection::AccumulatedPeriod;

/// One output row, column names as written to the header
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "MonthName")]
    month_name: String,
    #[serde(rename = "PeriodStart")]
    period_start: NaiveDate,
    #[serde(rename = "Contribution")]
    contribution: u64,
    #[serde(rename = "PreAccumulated")]
    pre_accumulated: String,
}

impl From<&AccumulatedPeriod> for CsvRow {
    fn from(row: &AccumulatedPeriod) -> Self {
        Self {
            year: row.year(),
            month: row.month(),
            month_name: row.month_name(),
            period_start: row.period_start_date(),
            contribution: row.contribution_amount(),
            pre_accumulated: format!("{:.2}", row.pre_accumulated_balance),
        }
    }
}

/// Write the projection rows as CSV
pub fn write_projection_csv<W: Write>(writer: W, rows: &[AccumulatedPeriod]) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(CsvRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}
