//! Global Application State
//!
//! Reactive state shared by every page. Page data (tables, customers,
//! reservations) stays local to each page and is reloaded on mount.

use leptos::*;

/// How long a success toast stays on screen
const SUCCESS_TOAST_MS: u32 = 3000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TOAST_MS, move || {
            success_signal.set(None);
        })
        .forget();
    }
}
