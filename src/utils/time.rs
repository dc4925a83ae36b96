use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{config, types::CalendarEvent};

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// `YYYY/MM/DD` of the event start in the application time zone.
pub fn format_event_date(event: &CalendarEvent) -> String {
    format_date_with(event, app_time_zone())
}

/// `HH:MM - HH:MM` in the application time zone. Open-ended events render
/// `HH:MM -`, all-day events render `終日`.
pub fn format_event_time_range(event: &CalendarEvent) -> String {
    format_time_range_with(event, app_time_zone())
}

pub fn starts_today(event: &CalendarEvent) -> bool {
    let tz = app_time_zone();
    event.starts_at.with_timezone(&tz).date_naive() == today_in_app_tz()
}

fn format_date_with(event: &CalendarEvent, tz: Tz) -> String {
    event
        .starts_at
        .with_timezone(&tz)
        .format("%Y/%m/%d")
        .to_string()
}

fn format_time_range_with(event: &CalendarEvent, tz: Tz) -> String {
    if event.all_day {
        return "終日".to_string();
    }
    let start = event.starts_at.with_timezone(&tz);
    match event.ends_at {
        Some(end) => format!(
            "{} - {}",
            start.format("%H:%M"),
            end.with_timezone(&tz).format("%H:%M")
        ),
        None => format!("{} -", start.format("%H:%M")),
    }
}
