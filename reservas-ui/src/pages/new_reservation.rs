//! New Reservation Page
//!
//! Booking form. Changing date, time or party size restarts a short timer;
//! when it fires the free tables for those inputs are fetched and offered in
//! the table picker.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use reservas::format::format_api_date;
use reservas::lookup::{empty_options_message, AvailabilityLookup, AVAILABILITY_DEBOUNCE_MS};
use reservas::models::{AvailabilityQuery, Customer, Table};
use reservas::validation::{FieldErrors, ReservationForm, MAX_PARTY_SIZE};

use crate::api;
use crate::components::{ErrorBanner, FormField, InlineLoading, SuccessBanner, INPUT_CLASS};

/// Delay before returning to the dashboard after a booking
const REDIRECT_DELAY_MS: u32 = 2000;

/// New reservation page component
#[component]
pub fn NewReservation() -> impl IntoView {
    let navigate = use_navigate();

    // Form fields
    let date = create_rw_signal(String::new());
    let time = create_rw_signal(String::new());
    let party_size = create_rw_signal(ReservationForm::default().party_size);
    let customer_id = create_rw_signal(None::<u32>);
    let table_id = create_rw_signal(None::<u32>);
    let notes = create_rw_signal(String::new());

    let customers = create_rw_signal(Vec::<Customer>::new());
    let available = create_rw_signal(Vec::<Table>::new());
    let query_complete = create_rw_signal(false);
    let checking = create_rw_signal(false);

    let submitting = create_rw_signal(false);
    let created = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let field_errors = create_rw_signal(FieldErrors::new());

    let lookup = store_value(AvailabilityLookup::new());
    let pending_timer = store_value(None::<Timeout>);

    // Customers for the picker; a failure only leaves it empty
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(list) => customers.set(list),
                Err(_) => web_sys::console::error_1(&"Error loading clientes".into()),
            }
        });
    });

    // Runs when the debounce timer fires
    let run_lookup = move |query: Option<AvailabilityQuery>| {
        let Some(query) = query else {
            lookup.update_value(AvailabilityLookup::clear);
            available.set(Vec::new());
            table_id.set(None);
            query_complete.set(lookup.with_value(AvailabilityLookup::query_complete));
            checking.set(false);
            return;
        };

        let mut ticket = None;
        lookup.update_value(|l| ticket = Some(l.begin(query)));
        let Some(ticket) = ticket else {
            return;
        };
        query_complete.set(lookup.with_value(AvailabilityLookup::query_complete));

        checking.set(true);
        spawn_local(async move {
            let result = api::check_availability(&query).await;

            // A newer lookup (or a cleared form) supersedes this response
            if !lookup.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                return;
            }

            match result {
                Ok(response) => available.set(response.tables),
                Err(_) => available.set(Vec::new()),
            }
            table_id.set(None);
            checking.set(false);
        });
    };

    // Restart the debounce timer whenever date, time or party size change.
    // Replacing the stored Timeout drops (and cancels) the previous one.
    create_effect(move |_| {
        let form = ReservationForm {
            date: date.get(),
            time: time.get(),
            party_size: party_size.get(),
            ..ReservationForm::default()
        };
        let timer = Timeout::new(AVAILABILITY_DEBOUNCE_MS, move || {
            run_lookup(form.availability_query());
        });
        pending_timer.set_value(Some(timer));
    });

    on_cleanup(move || {
        pending_timer.try_update_value(|timer| timer.take());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = ReservationForm {
            date: date.get_untracked(),
            time: time.get_untracked(),
            party_size: party_size.get_untracked(),
            customer_id: customer_id.get_untracked(),
            table_id: table_id.get_untracked(),
            notes: notes.get_untracked(),
        };

        let payload = match form.validate(chrono::Local::now().date_naive()) {
            Ok(payload) => payload,
            Err(errors) => {
                error.set(errors.first().map(str::to_string));
                field_errors.set(errors);
                return;
            }
        };

        field_errors.set(FieldErrors::new());
        error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_reservation(&payload).await {
                Ok(_) => {
                    created.set(true);
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/", Default::default());
                    })
                    .forget();
                }
                Err(e) => error.set(Some(e.or("Error al crear la reserva"))),
            }
            submitting.set(false);
        });
    };

    let today = format_api_date(chrono::Local::now().date_naive());
    let cancel_navigate = use_navigate();

    view! {
        <Show
            when=move || !created.get()
            fallback=|| view! {
                <SuccessBanner message="¡Reserva creada exitosamente! Redirigiendo al dashboard..." />
            }
        >
            <div class="space-y-6">
                <h1 class="text-3xl font-bold">"Nueva Reserva"</h1>

                <form on:submit=on_submit.clone() class="bg-white rounded-xl shadow p-6 max-w-xl space-y-5">
                    <ErrorBanner error=error />

                    <FormField label="Fecha de reserva" field="fecha" errors=field_errors>
                        <input
                            type="date"
                            min=today.clone()
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <FormField label="Hora de reserva" field="hora" errors=field_errors>
                        <input
                            type="time"
                            min="11:00"
                            max="22:00"
                            prop:value=move || time.get()
                            on:input=move |ev| time.set(event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <FormField label="Número de personas" field="numeroPersonas" errors=field_errors>
                        <input
                            type="number"
                            min="1"
                            max=MAX_PARTY_SIZE.to_string()
                            prop:value=move || party_size.get()
                            on:input=move |ev| party_size.set(event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <FormField label="Cliente" field="clienteId" errors=field_errors>
                        <select
                            on:change=move |ev| customer_id.set(event_target_value(&ev).parse().ok())
                            prop:value=move || customer_id.get().map(|id| id.to_string()).unwrap_or_default()
                            class=INPUT_CLASS
                        >
                            <option value="">"Seleccione un cliente"</option>
                            {move || {
                                customers.get()
                                    .into_iter()
                                    .map(|c| view! {
                                        <option value=c.id.to_string()>{c.option_label()}</option>
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </FormField>

                    <FormField label="Mesa disponible" field="mesaId" errors=field_errors>
                        {move || {
                            if checking.get() {
                                view! { <InlineLoading label="Verificando disponibilidad..." /> }.into_view()
                            } else {
                                view! {
                                    <TablePicker
                                        tables=available.get()
                                        selected=table_id
                                        query_complete=query_complete.get()
                                    />
                                }.into_view()
                            }
                        }}
                    </FormField>

                    <FormField label="Notas especiales (opcional)" field="notas" errors=field_errors>
                        <textarea
                            rows="3"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <div class="flex justify-end space-x-3">
                        <button
                            type="button"
                            disabled=move || submitting.get()
                            on:click={
                                let cancel_navigate = cancel_navigate.clone();
                                move |_| cancel_navigate("/", Default::default())
                            }
                            class="px-5 py-2 rounded-lg border border-gray-300 hover:bg-gray-100 transition-colors"
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submit_disabled(submitting.get(), available.with(Vec::len))
                            class="px-5 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white
                                   disabled:bg-gray-400 disabled:cursor-not-allowed transition-colors"
                        >
                            {move || if submitting.get() { "Creando..." } else { "Crear Reserva" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// A booking needs a table, so the submit button waits for at least one option
fn submit_disabled(submitting: bool, table_options: usize) -> bool {
    submitting || table_options == 0
}

/// Select over the tables returned by the availability lookup
#[component]
fn TablePicker(tables: Vec<Table>, selected: RwSignal<Option<u32>>, query_complete: bool) -> impl IntoView {
    let empty = tables.is_empty();

    view! {
        <select
            disabled=empty
            on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            class=INPUT_CLASS
        >
            {if empty {
                view! {
                    <option value="" disabled=true selected=true>
                        {empty_options_message(query_complete)}
                    </option>
                }.into_view()
            } else {
                view! {
                    <option value="">"Seleccione una mesa"</option>
                    {tables
                        .into_iter()
                        .map(|t| view! { <option value=t.id.to_string()>{t.option_label()}</option> })
                        .collect_view()}
                }.into_view()
            }}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_waits_for_table_options() {
        assert!(submit_disabled(false, 0));
        assert!(submit_disabled(true, 3));
        assert!(!submit_disabled(false, 3));
    }
}
