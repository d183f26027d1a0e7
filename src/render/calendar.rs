//! iCalendar (RFC 5545) deposit reminders
//!
//! One all-day event per scheduled month, each with a display alarm ahead
//! of the deposit day.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use super::group_thousands;
use crate::plan::OutputSettings;
use crate::projection::Period;

pub const PRODID: &str = "-//Retirement Savings Reminder//mxm.dk//";
pub const EVENT_SUMMARY: &str = "💰 Retirement Savings Deposit";

/// Maximum content line length in octets, excluding CRLF
const MAX_LINE_OCTETS: usize = 75;

/// Escape a TEXT property value
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Append a content line, folding it at 75 octets without splitting a UTF-8 sequence
fn push_line(out: &mut String, line: &str) {
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if used + len > budget {
            out.push_str("\r\n ");
            // Continuation lines lose one octet to the leading space
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(ch);
        used += len;
    }
    out.push_str("\r\n");
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn alarm_description(days_before: u32) -> String {
    match days_before {
        0 => "Reminder: Savings deposit due today!".to_string(),
        1 => "Reminder: Savings deposit due tomorrow!".to_string(),
        n => format!("Reminder: Savings deposit due in {} days!", n),
    }
}

/// Date the reminder for a period falls on
pub fn reminder_date(period: &Period, settings: &OutputSettings) -> NaiveDate {
    NaiveDate::from_ymd_opt(period.year, period.month, settings.reminder_day)
        .unwrap_or(period.period_start_date)
}

fn push_event(out: &mut String, period: &Period, settings: &OutputSettings, dtstamp: &str) {
    let date = reminder_date(period, settings);
    let next_day = date.checked_add_days(Days::new(1)).unwrap_or(date);
    let description = format!(
        "Month: {} {}\nAmount: {}{}\nStatus: Pending [ ] / Completed [X]",
        period.month_name(),
        period.year,
        settings.currency_symbol,
        group_thousands(period.contribution_amount),
    );

    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:savings-deposit-{}-{:02}@retirement-savings-reminder", date.year(), date.month()));
    push_line(out, &format!("DTSTAMP:{}", dtstamp));
    push_line(out, &format!("SUMMARY:{}", escape_text(EVENT_SUMMARY)));
    push_line(out, &format!("DESCRIPTION:{}", escape_text(&description)));
    push_line(out, &format!("DTSTART;VALUE=DATE:{}", format_date(date)));
    push_line(out, &format!("DTEND;VALUE=DATE:{}", format_date(next_day)));

    push_line(out, "BEGIN:VALARM");
    push_line(out, "ACTION:DISPLAY");
    push_line(out, &format!("DESCRIPTION:{}", escape_text(&alarm_description(settings.alarm_days_before))));
    push_line(out, &format!("TRIGGER:-P{}D", settings.alarm_days_before));
    push_line(out, "END:VALARM");
    push_line(out, "END:VEVENT");
}

/// Render a calendar with one reminder per scheduled month.
///
/// `dtstamp` is treated as UTC and written on every event.
pub fn render_calendar(schedule: &[Period], settings: &OutputSettings, dtstamp: NaiveDateTime) -> String {
    let stamp = dtstamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, &format!("PRODID:{}", PRODID));
    push_line(&mut out, "VERSION:2.0");

    for period in schedule {
        push_event(&mut out, period, settings, &stamp);
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::EscalationRule;
    use crate::projection::generate_schedule;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn schedule() -> Vec<Period> {
        generate_schedule(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            5800,
            Some(&EscalationRule::annual_november()),
        )
    }

    #[test]
    fn test_calendar_structure() {
        let ics = render_calendar(&schedule(), &OutputSettings::default(), stamp());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nPRODID:-//Retirement Savings Reminder//mxm.dk//\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(ics.matches("BEGIN:VALARM").count(), 2);
        assert!(ics.contains("DTSTAMP:20250315T093000Z\r\n"));
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_event_dates_and_alarm() {
        let ics = render_calendar(&schedule(), &OutputSettings::default(), stamp());

        assert!(ics.contains("DTSTART;VALUE=DATE:20251005\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20251006\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20251105\r\n"));
        assert!(ics.contains("UID:savings-deposit-2025-11@retirement-savings-reminder\r\n"));
        assert!(ics.contains("TRIGGER:-P1D\r\n"));
        assert!(ics.contains("DESCRIPTION:Reminder: Savings deposit due tomorrow!\r\n"));
    }

    #[test]
    fn test_description_is_escaped() {
        let ics = render_calendar(&schedule(), &OutputSettings::default(), stamp());
        let unfolded = ics.replace("\r\n ", "");

        assert!(unfolded.contains(
            "DESCRIPTION:Month: October 2025\\nAmount: ₹5\\,800\\nStatus: Pending [ ] / Completed [X]\r\n"
        ));
        assert!(unfolded.contains("Month: November 2025\\nAmount: ₹6\\,960\\n"));
    }

    #[test]
    fn test_lines_are_folded() {
        let ics = render_calendar(&schedule(), &OutputSettings::default(), stamp());
        for line in ics.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_push_line_respects_char_boundaries() {
        let mut out = String::new();
        let long = format!("SUMMARY:{}", "₹".repeat(40));
        push_line(&mut out, &long);

        let lines: Vec<&str> = out.trim_end_matches("\r\n").split("\r\n").collect();
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= MAX_LINE_OCTETS));
        assert!(lines[1..].iter().all(|l| l.starts_with(' ')));
        assert_eq!(out.replace("\r\n ", "").trim_end(), long);
    }

    #[test]
    fn test_custom_reminder_settings() {
        let settings = OutputSettings {
            reminder_day: 20,
            alarm_days_before: 3,
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let ics = render_calendar(&schedule(), &settings, stamp());
        assert!(ics.contains("DTSTART;VALUE=DATE:20251020\r\n"));
        assert!(ics.contains("TRIGGER:-P3D\r\n"));
        assert!(ics.contains("due in 3 days!"));
        assert!(ics.replace("\r\n ", "").contains("Amount: $5\\,800"));
    }

    #[test]
    fn test_empty_schedule() {
        let ics = render_calendar(&[], &OutputSettings::default(), stamp());
        assert_eq!(ics, format!("BEGIN:VCALENDAR\r\nPRODID:{}\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n", PRODID));
    }
}
