use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg" role="status">
                <span class="sr-only">"読み込み中"</span>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSection(
    #[prop(into, default = "読み込み中...".to_string())] message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-2 text-fg-muted">
            <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></div>
            <p class="text-sm font-medium">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn spinner_renders_accessible_status() {
        let html = render_to_string(|| view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("読み込み中"));
    }

    #[test]
    fn section_renders_default_message() {
        let html = render_to_string(|| view! { <LoadingSection /> });
        assert!(html.contains("読み込み中..."));
    }

    #[test]
    fn section_renders_custom_message() {
        let html = render_to_string(|| view! { <LoadingSection message="予定を読み込み中..." /> });
        assert!(html.contains("予定を読み込み中..."));
    }
}
