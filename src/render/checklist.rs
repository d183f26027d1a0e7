//! Markdown checklist document

use chrono::NaiveDate;

use super::{format_percent, group_thousands};
use crate::plan::{OutputSettings, SavingsPlan};
use crate::projection::AccumulatedPeriod;

/// English name of a calendar month (1-12)
fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_else(|| month.to_string())
}

fn savings_policy(plan: &SavingsPlan) -> String {
    match &plan.escalation {
        Some(rule) => format!(
            "{}% annual increment every {}",
            format_percent(rule.factor - 1.0),
            month_name(rule.month)
        ),
        None => "Fixed contribution".to_string(),
    }
}

/// Render the projection as a Markdown table with one unchecked row per month.
///
/// Balances are shown truncated to whole units.
pub fn render_checklist(plan: &SavingsPlan, rows: &[AccumulatedPeriod], settings: &OutputSettings) -> String {
    let rate = format_percent(plan.interest_rate);
    let symbol = &settings.currency_symbol;
    let mut md = format!(
        "# Retirement Savings Tracker ({rate}% Monthly Interest)\n\n\
         **Start**: {start}  \n\
         **Target**: {target}  \n\
         **Monthly Interest**: {rate}%  \n\
         **Savings Policy**: {policy}\n\n\
         | Status | Year | Month | Pre-Accumulated ({symbol}) | Monthly Saving ({symbol}) |\n\
         |--------|------|-------|----------------------|--------------------|\n",
        rate = rate,
        start = plan.start_date.format("%B %Y"),
        target = plan.end_date.format("%B %Y"),
        policy = savings_policy(plan),
        symbol = symbol,
    );

    for row in rows {
        md.push_str(&format!(
            "| [ ] | {} | {} | {} | {} |\n",
            row.year(),
            row.month_name(),
            group_thousands(row.pre_accumulated_balance.trunc() as u64),
            group_thousands(row.contribution_amount()),
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::EscalationRule;
    use crate::projection::ProjectionEngine;

    fn plan() -> SavingsPlan {
        SavingsPlan {
            interest_rate: 0.025,
            initial_contribution: 5800,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            escalation: Some(EscalationRule::annual_november()),
        }
    }

    #[test]
    fn test_header() {
        let plan = plan();
        let md = render_checklist(&plan, &[], &OutputSettings::default());
        let lines: Vec<&str> = md.lines().collect();

        assert_eq!(lines[0], "# Retirement Savings Tracker (2.5% Monthly Interest)");
        assert_eq!(lines[2], "**Start**: April 2025  ");
        assert_eq!(lines[3], "**Target**: December 2025  ");
        assert_eq!(lines[4], "**Monthly Interest**: 2.5%  ");
        assert_eq!(lines[5], "**Savings Policy**: 20% annual increment every November");
        assert_eq!(lines[7], "| Status | Year | Month | Pre-Accumulated (₹) | Monthly Saving (₹) |");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_full_document_layout() {
        let plan = SavingsPlan {
            end_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            ..plan()
        };
        let result = ProjectionEngine::new(plan.clone()).project();
        let md = render_checklist(&plan, &result.periods, &OutputSettings::default());

        let expected = "# Retirement Savings Tracker (2.5% Monthly Interest)\n\
                        \n\
                        **Start**: April 2025  \n\
                        **Target**: April 2025  \n\
                        **Monthly Interest**: 2.5%  \n\
                        **Savings Policy**: 20% annual increment every November\n\
                        \n\
                        | Status | Year | Month | Pre-Accumulated (₹) | Monthly Saving (₹) |\n\
                        |--------|------|-------|----------------------|--------------------|\n\
                        | [ ] | 2025 | April | 0 | 5,800 |\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_rows() {
        let plan = plan();
        let result = ProjectionEngine::new(plan.clone()).project();
        let md = render_checklist(&plan, &result.periods, &OutputSettings::default());
        let rows: Vec<&str> = md.lines().filter(|l| l.starts_with("| [ ]")).collect();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], "| [ ] | 2025 | April | 0 | 5,800 |");
        assert_eq!(rows[1], "| [ ] | 2025 | May | 5,945 | 5,800 |");
        // 12038.62 truncates to 12038
        assert_eq!(rows[2], "| [ ] | 2025 | June | 12,038 | 5,800 |");
        assert!(rows[7].starts_with("| [ ] | 2025 | November |"));
        assert!(rows[7].ends_with("| 6,960 |"));
    }

    #[test]
    fn test_fixed_contribution_and_symbol() {
        let mut plan = plan();
        plan.escalation = None;
        let settings = OutputSettings {
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let md = render_checklist(&plan, &[], &settings);
        assert!(md.contains("**Savings Policy**: Fixed contribution"));
        assert!(md.contains("Pre-Accumulated ($)"));
    }
}
