//! Table Management Page
//!
//! Cards for every table with create, edit and delete.

use leptos::*;
use reservas::format::display_timestamp_date;
use reservas::models::{Table, TableUpdate};
use reservas::status::{availability_badge, capacity_tone};
use reservas::validation::{FieldErrors, TableForm, MAX_CAPACITY, TABLE_LOCATIONS};

use crate::api;
use crate::components::{Badge, ErrorBanner, FormField, Loading, Modal, INPUT_CLASS};
use crate::state::global::use_global_state;

/// Table management page component
#[component]
pub fn TableManagement() -> impl IntoView {
    let state = use_global_state();

    let tables = create_rw_signal(Vec::<Table>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    // Dialog state
    let dialog_open = create_rw_signal(false);
    let editing = create_rw_signal(None::<Table>);
    let form = create_rw_signal(TableForm::default());
    let field_errors = create_rw_signal(FieldErrors::new());
    let submitting = create_rw_signal(false);

    let reload = move || {
        spawn_local(async move {
            match api::fetch_tables().await {
                Ok(list) => tables.set(list),
                Err(e) => error.set(Some(e.or("Error al cargar las mesas"))),
            }
            loading.set(false);
        });
    };

    create_effect(move |_| reload());

    let open_dialog = move |table: Option<Table>| {
        let initial = match &table {
            Some(table) => TableForm::from_table(table),
            None => tables.with(|list| TableForm::for_new(list)),
        };
        form.set(initial);
        field_errors.set(FieldErrors::new());
        editing.set(table);
        dialog_open.set(true);
    };

    let close_dialog = move || {
        dialog_open.set(false);
        editing.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let table = match form.with_untracked(TableForm::validate) {
            Ok(table) => table,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        submitting.set(true);

        let editing_id = editing.with_untracked(|t| t.as_ref().map(|t| t.id));
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_table(id, &TableUpdate::from(table)).await,
                None => api::create_table(&table).await,
            };
            match result {
                Ok(table) => {
                    state.show_success(&format!("Mesa {} guardada", table.number));
                    reload();
                    close_dialog();
                }
                Err(e) => error.set(Some(e.or("Error al guardar la mesa"))),
            }
            submitting.set(false);
        });
    };

    let on_delete = move |table: Table| {
        let question = format!("¿Está seguro de eliminar la mesa {}?", table.number);
        if !window().confirm_with_message(&question).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match api::delete_table(table.id).await {
                Ok(()) => reload(),
                Err(e) => error.set(Some(e.or("Error al eliminar la mesa"))),
            }
        });
    };

    let title = Signal::derive(move || {
        if editing.with(Option::is_some) {
            "Editar Mesa".to_string()
        } else {
            "Nueva Mesa".to_string()
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Gestión de Mesas"</h1>
                <button
                    on:click=move |_| open_dialog(None)
                    class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium"
                >
                    "+ Nueva Mesa"
                </button>
            </div>

            <ErrorBanner error=error />

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-4">
                            <For
                                each=move || tables.get()
                                key=|table| (table.id, table.number, table.capacity, table.available, table.location.clone())
                                children=move |table| view! {
                                    <TableCard table=table on_edit=open_dialog on_delete=on_delete />
                                }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <Modal open=dialog_open title=title on_close=close_dialog>
                <form on:submit=on_submit class="space-y-4">
                    <FormField label="Número de mesa" field="numero" errors=field_errors>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.number.clone())
                            on:input=move |ev| form.update(|f| f.number = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <FormField label="Capacidad (personas)" field="capacidad" errors=field_errors>
                        <input
                            type="number"
                            min="1"
                            max=MAX_CAPACITY.to_string()
                            prop:value=move || form.with(|f| f.capacity.clone())
                            on:input=move |ev| form.update(|f| f.capacity = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </FormField>

                    <FormField label="Ubicación" field="ubicacion" errors=field_errors>
                        <select
                            prop:value=move || form.with(|f| f.location.clone())
                            on:change=move |ev| form.update(|f| f.location = event_target_value(&ev))
                            class=INPUT_CLASS
                        >
                            <option value="">"Seleccione una ubicación"</option>
                            {move || location_options(&form.with(|f| f.location.clone()))
                                .into_iter()
                                .map(|loc| view! { <option value=loc.clone()>{loc}</option> })
                                .collect_view()}
                        </select>
                    </FormField>

                    <FormField label="Estado" field="disponible" errors=field_errors>
                        <select
                            prop:value=move || form.with(|f| f.available.to_string())
                            on:change=move |ev| form.update(|f| f.available = event_target_value(&ev) == "true")
                            class=INPUT_CLASS
                        >
                            <option value="true">"Disponible"</option>
                            <option value="false">"No disponible"</option>
                        </select>
                    </FormField>

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
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
                            {move || {
                                if submitting.get() {
                                    "Guardando..."
                                } else if editing.with(Option::is_some) {
                                    "Actualizar"
                                } else {
                                    "Crear"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

/// Preset locations, plus the current one if it is not a preset
fn location_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = TABLE_LOCATIONS.iter().map(|l| l.to_string()).collect();
    if !current.is_empty() && !TABLE_LOCATIONS.contains(&current) {
        options.push(current.to_string());
    }
    options
}

#[component]
fn TableCard<E, D>(table: Table, on_edit: E, on_delete: D) -> impl IntoView
where
    E: Fn(Option<Table>) + Copy + 'static,
    D: Fn(Table) + Copy + 'static,
{
    let (availability, availability_tone) = availability_badge(table.available);
    let for_edit = table.clone();
    let for_delete = table.clone();

    view! {
        <div class="bg-white rounded-xl shadow p-5 flex flex-col">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-2xl font-semibold">{format!("Mesa {}", table.number)}</h2>
                <Badge label=availability tone=availability_tone />
            </div>
            <p class="text-gray-600 mb-2">
                <strong>"Ubicación: "</strong>{table.location.clone()}
            </p>
            <div class="flex items-center space-x-2 mb-3">
                <span class="text-gray-600"><strong>"Capacidad:"</strong></span>
                <Badge label=format!("{} personas", table.capacity) tone=capacity_tone(table.capacity) />
            </div>
            <p class="text-sm text-gray-500">
                {format!("Creada: {}", display_timestamp_date(table.created_at))}
            </p>
            <div class="flex space-x-2 mt-4">
                <button
                    on:click=move |_| on_edit(Some(for_edit.clone()))
                    class="px-3 py-1 text-sm rounded text-primary-700 hover:bg-primary-50"
                >
                    "✎ Editar"
                </button>
                <button
                    on:click=move |_| on_delete(for_delete.clone())
                    class="px-3 py-1 text-sm rounded text-red-600 hover:bg-red-50"
                >
                    "🗑 Eliminar"
                </button>
            </div>
        </div>
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_options_keep_custom_location() {
        assert_eq!(location_options("").len(), TABLE_LOCATIONS.len());
        assert_eq!(location_options("Terraza").len(), TABLE_LOCATIONS.len());

        let options = location_options("Jardín");
        assert_eq!(options.len(), TABLE_LOCATIONS.len() + 1);
        assert_eq!(options.last().map(String::as_str), Some("Jardín"));
    }
}
