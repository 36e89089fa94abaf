//! Reservation List Page
//!
//! All reservations with date and status filters and the status actions
//! allowed for each card.

use leptos::*;
use reservas::format::{display_date, format_api_time, parse_api_date};
use reservas::models::{filter_by_status, patch_status, Reservation};
use reservas::status::{ReservationStatus, StatusAction};

use crate::api;
use crate::components::{badge::button_class, ErrorBanner, Loading, StatusBadge};
use crate::state::global::use_global_state;

/// Reservation list page component
#[component]
pub fn ReservationList() -> impl IntoView {
    let state = use_global_state();

    let reservations = create_rw_signal(Vec::<Reservation>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    // Filters: the date goes to the server, the status is applied here
    let date_filter = create_rw_signal(String::new());
    let status_filter = create_rw_signal(None::<ReservationStatus>);

    // Reload whenever the date filter changes (and on mount)
    create_effect(move |_| {
        let date = parse_api_date(&date_filter.get()).ok();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_reservations(date).await {
                Ok(list) => reservations.set(list),
                Err(_) => error.set(Some("Error al cargar las reservas".to_string())),
            }
            loading.set(false);
        });
    });

    let on_action = move |id: u32, action: StatusAction| {
        spawn_local(async move {
            match api::apply_action(id, action).await {
                Ok(_) => {
                    reservations.update(|list| {
                        patch_status(list, id, action.resulting_status());
                    });
                    state.show_success(&format!(
                        "Reserva {}",
                        action.resulting_status().label().to_lowercase()
                    ));
                }
                Err(e) => error.set(Some(e.or(&action.failure_message()))),
            }
        });
    };

    let visible = create_memo(move |_| {
        reservations.with(|list| filter_by_status(list, status_filter.get()))
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Lista de Reservas"</h1>

            <ErrorBanner error=error />

            // Filters
            <div class="flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Filtrar por fecha"</label>
                    <input
                        type="date"
                        prop:value=move || date_filter.get()
                        on:change=move |ev| date_filter.set(event_target_value(&ev))
                        class="bg-white rounded-lg px-3 py-2 border border-gray-300"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Estado"</label>
                    <select
                        prop:value=move || status_filter.get().map(|s| s.as_str().to_string()).unwrap_or_default()
                        on:change=move |ev| status_filter.set(event_target_value(&ev).parse().ok())
                        class="bg-white rounded-lg px-3 py-2 border border-gray-300 min-w-[10rem]"
                    >
                        <option value="">"Todos"</option>
                        {ReservationStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button
                    on:click=move |_| {
                        status_filter.set(None);
                        // Setting the date (even to the same value) reloads the list
                        date_filter.set(String::new());
                    }
                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100"
                >
                    "Limpiar Filtros"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let list = visible.get();
                if list.is_empty() {
                    view! { <p class="text-gray-500">"No se encontraron reservas"</p> }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-4">
                            {list
                                .into_iter()
                                .map(|r| view! { <ReservationCard reservation=r on_action=on_action /> })
                                .collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ReservationCard<F>(reservation: Reservation, on_action: F) -> impl IntoView
where
    F: Fn(u32, StatusAction) + Copy + 'static,
{
    let id = reservation.id;
    let table = reservation.table_label();
    let notes = reservation.visible_notes().map(str::to_string);
    let actions = reservation.actions();

    view! {
        <div class="bg-white rounded-xl shadow p-5 flex flex-col">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-lg font-semibold">{table}</h2>
                <StatusBadge status=reservation.status />
            </div>
            <p class="text-gray-600 mb-1"><strong>"Cliente: "</strong>{reservation.customer_name()}</p>
            <p class="text-sm"><strong>"Fecha: "</strong>{display_date(reservation.date)}</p>
            <p class="text-sm"><strong>"Hora: "</strong>{format_api_time(reservation.time)}</p>
            <p class="text-sm"><strong>"Personas: "</strong>{reservation.party_size}</p>
            <p class="text-sm"><strong>"Ubicación: "</strong>{reservation.location().to_string()}</p>
            {notes.map(|notes| view! {
                <p class="text-sm text-gray-500 mt-1"><strong>"Notas: "</strong>{notes}</p>
            })}

            {(!actions.is_empty()).then(|| view! {
                <div class="flex space-x-2 mt-4">
                    {actions
                        .iter()
                        .map(|&action| view! {
                            <button
                                on:click=move |_| on_action(id, action)
                                class=format!("px-3 py-1 text-sm rounded {}", button_class(action.tone()))
                            >
                                {action.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
