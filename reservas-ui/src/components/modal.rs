//! Modal Dialog
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.

use leptos::*;

#[component]
pub fn Modal<F>(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let children = store_value(children);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center">
                <div class="absolute inset-0 bg-black/40" on:click=move |_| on_close() />
                <div class="relative bg-white rounded-xl shadow-xl w-full max-w-lg mx-4 p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">{move || title.get()}</h2>
                        <button
                            type="button"
                            class="text-gray-500 hover:text-gray-800"
                            aria-label="Cerrar"
                            on:click=move |_| on_close()
                        >
                            "✕"
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
