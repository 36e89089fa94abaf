//! Form Field
//!
//! Labelled form row showing the validation message for its field.

use leptos::*;
use reservas::validation::FieldErrors;

/// Input classes shared by every form
pub const INPUT_CLASS: &str = "w-full bg-white rounded-lg px-4 py-2 border border-gray-300 \
                               focus:border-primary-500 focus:outline-none disabled:bg-gray-100";

#[component]
pub fn FormField(
    label: &'static str,
    /// Wire name of the field, as used by [`FieldErrors`]
    field: &'static str,
    errors: RwSignal<FieldErrors>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-1">{label}</label>
            {children()}
            {move || errors.with(|e| e.get(field).map(str::to_string)).map(|msg| view! {
                <p class="text-xs text-red-600 mt-1 ml-1">{msg}</p>
            })}
        </div>
    }
}
