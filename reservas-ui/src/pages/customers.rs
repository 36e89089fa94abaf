//! Customer History Page
//!
//! Customer list with search, frequent-customer badge, expandable
//! reservation history and a registration dialog.

use leptos::*;
use reservas::format::{display_date, display_timestamp_date, format_api_time};
use reservas::models::{Customer, Reservation};
use reservas::status::BadgeTone;
use reservas::validation::{CustomerForm, FieldErrors};
use std::collections::{HashMap, HashSet};

use crate::api;
use crate::components::{
    Badge, ErrorBanner, FormField, InlineLoading, Loading, Modal, StatusBadge, INPUT_CLASS,
};
use crate::state::global::use_global_state;

/// Customer history page component
#[component]
pub fn CustomerHistory() -> impl IntoView {
    let state = use_global_state();

    let customers = create_rw_signal(Vec::<Customer>::new());
    let frequent = create_rw_signal(HashSet::<u32>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let search = create_rw_signal(String::new());

    // Expanded cards and the histories fetched so far
    let expanded = create_rw_signal(HashSet::<u32>::new());
    let histories = create_rw_signal(HashMap::<u32, Vec<Reservation>>::new());

    // New customer dialog
    let dialog_open = create_rw_signal(false);
    let form = create_rw_signal(CustomerForm::default());
    let field_errors = create_rw_signal(FieldErrors::new());
    let submitting = create_rw_signal(false);

    let load_data = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_customer_overview().await {
                Ok((all, frequent_list)) => {
                    customers.set(all);
                    frequent.set(frequent_list.iter().map(|c| c.id).collect());
                }
                Err(_) => error.set(Some("Error al cargar los datos".to_string())),
            }
            loading.set(false);
        });
    };

    create_effect(move |_| load_data());

    let run_search = move || {
        let term = search.get_untracked();
        if term.trim().is_empty() {
            load_data();
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::search_customers(&term).await {
                Ok(found) => customers.set(found),
                Err(_) => error.set(Some("Error en la búsqueda".to_string())),
            }
            loading.set(false);
        });
    };

    let toggle_history = move |id: u32| {
        let opening = !expanded.with_untracked(|set| set.contains(&id));
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });

        // Histories are fetched once per page visit
        if opening && !histories.with_untracked(|h| h.contains_key(&id)) {
            spawn_local(async move {
                match api::fetch_customer_history(id).await {
                    Ok(history) => histories.update(|h| {
                        h.insert(id, history);
                    }),
                    Err(_) => web_sys::console::error_1(
                        &format!("Error loading client history {}", id).into(),
                    ),
                }
            });
        }
    };

    let close_dialog = move || {
        dialog_open.set(false);
        form.set(CustomerForm::default());
        field_errors.set(FieldErrors::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let customer = match form.with_untracked(CustomerForm::validate) {
            Ok(customer) => customer,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        submitting.set(true);

        spawn_local(async move {
            match api::create_customer(&customer).await {
                Ok(created) => {
                    state.show_success(&format!("Cliente {} registrado", created.full_name()));
                    load_data();
                    close_dialog();
                }
                Err(e) => error.set(Some(e.or("Error al crear el cliente"))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Historial de Clientes"</h1>
                <button
                    on:click=move |_| dialog_open.set(true)
                    class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium"
                >
                    "+ Nuevo Cliente"
                </button>
            </div>

            <ErrorBanner error=error />

            // Search
            <div class="flex items-center space-x-2">
                <input
                    type="text"
                    placeholder="Buscar por nombre o teléfono"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                    class="flex-1 max-w-md bg-white rounded-lg px-4 py-2 border border-gray-300
                           focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=move |_| run_search()
                    class="px-4 py-2 rounded-lg border border-primary-600 text-primary-700 hover:bg-primary-50"
                >
                    "🔍 Buscar"
                </button>
                <button
                    on:click=move |_| {
                        search.set(String::new());
                        load_data();
                    }
                    class="px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100"
                >
                    "Limpiar"
                </button>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            <For
                                each=move || customers.get()
                                key=|customer| customer.id
                                children=move |customer| {
                                    let id = customer.id;
                                    view! {
                                        <CustomerCard
                                            customer=customer
                                            frequent=Signal::derive(move || frequent.with(|f| f.contains(&id)))
                                            expanded=Signal::derive(move || expanded.with(|e| e.contains(&id)))
                                            history=Signal::derive(move || histories.with(|h| h.get(&id).cloned()))
                                            on_toggle=toggle_history
                                        />
                                    }
                                }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <Modal open=dialog_open title="Nuevo Cliente".to_string() on_close=close_dialog>
                <form on:submit=on_submit class="space-y-4">
                    <FormField label="Nombre" field="nombre" errors=field_errors>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>
                    <FormField label="Apellido" field="apellido" errors=field_errors>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>
                    <FormField label="Teléfono" field="telefono" errors=field_errors>
                        <input
                            type="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>
                    <FormField label="Email" field="email" errors=field_errors>
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            disabled=move || submitting.get()
                            on:click=move |_| close_dialog()
                            class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100"
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white
                                   disabled:bg-gray-400"
                        >
                            {move || if submitting.get() { "Creando..." } else { "Crear Cliente" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[component]
fn CustomerCard<F>(
    customer: Customer,
    frequent: Signal<bool>,
    expanded: Signal<bool>,
    history: Signal<Option<Vec<Reservation>>>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(u32) + Copy + 'static,
{
    let id = customer.id;

    view! {
        <div class="bg-white rounded-xl shadow p-5">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <h2 class="text-lg font-semibold">{customer.full_name()}</h2>
                    {move || frequent.get().then(|| view! {
                        <Badge label="★ Cliente Frecuente" tone=BadgeTone::Warning />
                    })}
                </div>
                <button
                    on:click=move |_| on_toggle(id)
                    class="px-2 py-1 rounded hover:bg-gray-100"
                    aria-label="Historial"
                >
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </button>
            </div>

            <div class="flex flex-wrap gap-x-6 gap-y-1 mt-2 text-gray-600">
                <span><strong>"Teléfono: "</strong>{customer.phone.clone()}</span>
                <span><strong>"Email: "</strong>{customer.email.clone()}</span>
                <span><strong>"Visitas: "</strong>{customer.visit_count}</span>
            </div>
            <p class="text-sm text-gray-500 mt-1">
                {format!("Registrado: {}", display_timestamp_date(customer.registered_at))}
            </p>

            <Show when=move || expanded.get()>
                <div class="mt-4 border-t border-gray-200 pt-4">
                    <h3 class="text-lg font-semibold mb-2">"Historial de Reservas"</h3>
                    {move || match history.get() {
                        None => view! { <InlineLoading label="Cargando..." /> }.into_view(),
                        Some(list) if list.is_empty() => view! {
                            <p class="text-gray-500">"No hay reservas en el historial"</p>
                        }.into_view(),
                        Some(list) => view! {
                            <div class="space-y-2 max-h-72 overflow-auto">
                                {list.into_iter().map(|r| view! { <HistoryEntry reservation=r /> }).collect_view()}
                            </div>
                        }.into_view(),
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn HistoryEntry(reservation: Reservation) -> impl IntoView {
    let table = reservation.table_label();
    let notes = reservation.visible_notes().map(str::to_string);

    view! {
        <div class="p-3 border border-gray-200 rounded-lg">
            <div class="flex items-center justify-between mb-1">
                <span class="text-sm">
                    <strong>{table}</strong>
                    {format!(
                        " - {} a las {}",
                        display_date(reservation.date),
                        format_api_time(reservation.time)
                    )}
                </span>
                <StatusBadge status=reservation.status />
            </div>
            <p class="text-sm text-gray-600">
                {format!(
                    "Personas: {} | Ubicación: {}",
                    reservation.party_size,
                    reservation.location()
                )}
            </p>
            {notes.map(|notes| view! {
                <p class="text-sm text-gray-500">{format!("Notas: {}", notes)}</p>
            })}
        </div>
    }
}
