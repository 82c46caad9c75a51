//! Loading Component
//!
//! Loading spinners and the fetch error banner.

use leptos::*;

/// Full-section loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Fixed user-facing error in place of a screen's content
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div role="alert" class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3">
            {message}
        </div>
    }
}
