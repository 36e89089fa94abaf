//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner with a caption
#[component]
pub fn InlineLoading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 text-gray-600">
            <span class="inline-block loading-spinner w-5 h-5" />
            <span>{label}</span>
        </div>
    }
}
