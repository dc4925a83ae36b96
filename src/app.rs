use crate::{components::events::EventListSection, config, types::CalendarEvent};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    // Events arrive from the embedding host; nothing is fetched here.
    let (events, _set_events) = create_signal(Vec::<CalendarEvent>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, _set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            let zone = config::await_time_zone().await;
            log::info!("Display time zone resolved: {}", zone);
            set_loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <h1 class="text-xl font-semibold text-fg">
                            "Eventboard"
                        </h1>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <EventListSection
                    events=events.into()
                    loading=loading.into()
                    error=error.into()
                />
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn renders_header_and_pending_list() {
        let html = render_to_string(|| view! { <App /> });
        assert!(html.contains("Eventboard"));
        // Effects do not run during server rendering, so the list is still
        // in its loading state here.
        assert!(html.contains("予定を読み込み中..."));
    }
}
