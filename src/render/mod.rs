//! Output renderers for a projection: checklist, calendar reminders and CSV

pub mod calendar;
pub mod checklist;
pub mod csv_export;

pub use calendar::render_calendar;
pub use checklist::render_checklist;
pub use csv_export::write_projection_csv;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::TrackerResult;
use crate::plan::{OutputSettings, SavingsPlan};
use crate::projection::ProjectionResult;

/// File name of the Markdown checklist
pub const CHECKLIST_FILE: &str = "savings_tracker.md";

/// File name of the calendar reminders
pub const CALENDAR_FILE: &str = "savings_reminder.ics";

/// File name of the optional CSV export
pub const CSV_FILE: &str = "savings_projection.csv";

/// Format a whole amount with comma thousands separators (1234567 -> "1,234,567")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a fraction as a percentage without trailing zeros (0.025 -> "2.5")
pub fn format_percent(rate: f64) -> String {
    let formatted = format!("{:.4}", rate * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Write the checklist and calendar (and optionally the CSV export) into the output directory.
///
/// Returns the paths written.
pub fn write_outputs(
    plan: &SavingsPlan,
    result: &ProjectionResult,
    settings: &OutputSettings,
    dtstamp: NaiveDateTime,
    include_csv: bool,
) -> TrackerResult<Vec<PathBuf>> {
    let dir = Path::new(&settings.output_dir);
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();

    let checklist_path = dir.join(CHECKLIST_FILE);
    fs::write(&checklist_path, render_checklist(plan, &result.periods, settings))?;
    written.push(checklist_path);

    let calendar_path = dir.join(CALENDAR_FILE);
    fs::write(&calendar_path, render_calendar(&result.schedule(), settings, dtstamp))?;
    written.push(calendar_path);

    if include_csv {
        let csv_path = dir.join(CSV_FILE);
        let file = fs::File::create(&csv_path)?;
        write_projection_csv(file, &result.periods)?;
        written.push(csv_path);
    }

    for path in &written {
        log::info!("Wrote {}", path.display());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5800), "5,800");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.025), "2.5");
        assert_eq!(format_percent(0.2), "20");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(0.0125), "1.25");
    }

    #[test]
    fn test_write_outputs() {
        let dir = std::env::temp_dir().join(format!("savings_tracker_test_{}", std::process::id()));
        let settings = OutputSettings {
            output_dir: dir.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let plan = SavingsPlan::default_plan();
        let result = ProjectionEngine::new(plan.clone()).project();
        let stamp = chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let written = write_outputs(&plan, &result, &settings, stamp, true).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }

        let checklist = fs::read_to_string(dir.join(CHECKLIST_FILE)).unwrap();
        assert!(checklist.contains("| [ ] | 2035 | October |"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
