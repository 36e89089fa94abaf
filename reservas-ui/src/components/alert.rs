//! Alert Banners
//!
//! Inline error and success messages at the top of a page or dialog.

use leptos::*;

/// Dismissible error banner, shown while `error` holds a message
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="flex items-start justify-between bg-red-50 border border-red-200 \
                            text-red-800 rounded-lg px-4 py-3 mb-4" role="alert">
                    <span>{message}</span>
                    <button
                        type="button"
                        class="ml-4 text-red-600 hover:text-red-800"
                        aria-label="Cerrar"
                        on:click=move |_| error.set(None)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

/// Static success banner
#[component]
pub fn SuccessBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-800 rounded-lg px-4 py-3 mb-4" role="status">
            {message}
        </div>
    }
}
