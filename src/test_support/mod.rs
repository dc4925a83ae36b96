use chrono::{TimeZone, Utc};
use leptos::*;

use crate::types::CalendarEvent;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

pub fn sample_event(id: &str, title: &str, category: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        starts_at: Utc.with_ymd_and_hms(2025, 3, 10, 3, 0, 0).unwrap(),
        ends_at: Some(Utc.with_ymd_and_hms(2025, 3, 10, 4, 30, 0).unwrap()),
        all_day: false,
        location: None,
        description: None,
    }
}
