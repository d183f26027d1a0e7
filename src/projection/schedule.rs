//! Monthly contribution schedule generation

use chrono::{Datelike, Months, NaiveDate};

use super::periods::Period;
use crate::plan::EscalationRule;

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of calendar months from `start` to `end`, counting both ends.
/// Zero when `end` falls in an earlier month than `start`.
pub fn months_between_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
    let start_index = start.year() as i64 * 12 + start.month0() as i64;
    let end_index = end.year() as i64 * 12 + end.month0() as i64;
    (end_index - start_index + 1).max(0) as usize
}

/// Build the schedule of monthly contributions from `start_date` to `end_date` inclusive.
///
/// The escalation check runs at the start of each month, so an escalation
/// month's own contribution already carries the increase.
pub fn generate_schedule(
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_contribution: u64,
    escalation: Option<&EscalationRule>,
) -> Vec<Period> {
    let end = first_of_month(end_date);
    let mut current = first_of_month(start_date);
    let mut contribution = initial_contribution;
    let mut schedule = Vec::with_capacity(months_between_inclusive(current, end));

    while current <= end {
        let (year, month) = (current.year(), current.month());

        if let Some(rule) = escalation {
            if rule.should_escalate(year, month) {
                let escalated = rule.apply(contribution);
                log::debug!("Escalating contribution in {}-{:02}: {} -> {}", year, month, contribution, escalated);
                contribution = escalated;
            }
        }

        schedule.push(Period {
            year,
            month,
            contribution_amount: contribution,
            period_start_date: current,
        });

        current = match current.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    schedule
}
