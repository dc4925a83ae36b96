use crate::{
    components::{empty_state::EmptyState, loading::LoadingSection},
    types::CalendarEvent,
    utils::{
        labels::{event_category_options, label_or_key},
        time::{format_event_date, format_event_time_range, starts_today},
    },
};
use leptos::*;

#[component]
pub fn EventListSection(
    events: Signal<Vec<CalendarEvent>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow overflow-hidden sm:rounded-md space-y-3 p-4">
            <Show when=move || error.get().is_some()>
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                    <p class="text-sm">{move || error.get().unwrap_or_default()}</p>
                </div>
            </Show>
            <Show when=move || loading.get()>
                <LoadingSection message="予定を読み込み中..." />
            </Show>
            <Show when=move || !loading.get() && events.get().is_empty()>
                <EmptyState
                    title="表示できる予定がありません"
                    description="新しい予定が登録されるまでお待ちください。".to_string()
                />
            </Show>
            <Show when=move || !loading.get() && !events.get().is_empty()>
                <ul class="divide-y divide-border">
                    <For
                        each=move || events.get()
                        key=|event| event.id.clone()
                        children=move |event| view! { <EventRow event=event /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn EventRow(event: CalendarEvent) -> impl IntoView {
    let options = event_category_options();
    let category = label_or_key(&event.category, &options).to_string();
    let schedule = format!(
        "{} {}",
        format_event_date(&event),
        format_event_time_range(&event)
    );
    let today = starts_today(&event);
    let title = event.title.clone();
    let location = event.location.clone();
    let description = event.description.clone();

    view! {
        <li class="px-2 py-4 sm:px-6">
            <div class="flex items-center justify-between">
                <div>
                    <div class="flex items-center gap-2">
                        <span class="text-sm font-medium text-fg">{title}</span>
                        <span class="inline-flex items-center px-2 py-0.5 rounded-full text-xs bg-primary-subtle text-action-primary-bg">
                            {category}
                        </span>
                        <Show when=move || today>
                            <span class="inline-flex items-center px-2 py-0.5 rounded-full text-xs bg-status-warning-bg text-status-warning-text">
                                {"今日"}
                            </span>
                        </Show>
                    </div>
                    <div class="text-sm text-fg-muted">{schedule}</div>
                    {location.map(|location| view! {
                        <div class="text-sm text-fg-muted">
                            <i class="fas fa-map-marker-alt mr-1"></i>
                            {location}
                        </div>
                    })}
                    {description.map(|description| view! {
                        <p class="mt-1 text-sm text-fg-muted">{description}</p>
                    })}
                </div>
            </div>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{render_to_string, sample_event};

    fn render_section(
        events: Vec<CalendarEvent>,
        loading: bool,
        error: Option<String>,
    ) -> String {
        render_to_string(move || {
            let (events, _) = create_signal(events);
            let (loading, _) = create_signal(loading);
            let (error, _) = create_signal(error);
            view! {
                <EventListSection
                    events=events.into()
                    loading=loading.into()
                    error=error.into()
                />
            }
        })
    }

    #[test]
    fn shows_loading_message_while_pending() {
        let html = render_section(Vec::new(), true, None);
        assert!(html.contains("予定を読み込み中..."));
        assert!(!html.contains("表示できる予定がありません"));
    }

    #[test]
    fn shows_empty_state_without_events() {
        let html = render_section(Vec::new(), false, None);
        assert!(html.contains("表示できる予定がありません"));
    }

    #[test]
    fn shows_error_banner() {
        let html = render_section(Vec::new(), false, Some("取得に失敗しました".into()));
        assert!(html.contains("取得に失敗しました"));
    }

    #[test]
    fn resolves_known_category_to_label() {
        let html = render_section(
            vec![sample_event("ev-1", "定例ミーティング", "meeting")],
            false,
            None,
        );
        assert!(html.contains("定例ミーティング"));
        assert!(html.contains("会議"));
    }

    #[test]
    fn unknown_category_falls_back_to_raw_key() {
        let html = render_section(
            vec![sample_event("ev-1", "オフサイト", "offsite")],
            false,
            None,
        );
        assert!(html.contains("offsite"));
    }

    #[test]
    fn all_day_event_renders_without_time_range() {
        let mut event = sample_event("ev-1", "創立記念日", "other");
        event.all_day = true;
        let html = render_section(vec![event], false, None);
        assert!(html.contains("終日"));
    }
}
