//! Dashboard Page
//!
//! Today's reservations and the overall counters per status.

use leptos::*;
use reservas::format::format_api_time;
use reservas::models::{DashboardData, Reservation};
use reservas::status::ReservationStatus;

use crate::api;
use crate::components::{ErrorBanner, Loading};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let data = create_rw_signal(None::<DashboardData>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(dashboard) => data.set(Some(dashboard)),
                // The failed call was already logged to the console with its detail
                Err(_) => error.set(Some(DashboardData::LOAD_ERROR.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">"Dashboard del Restaurante"</h1>

            <ErrorBanner error=error />

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                match data.get() {
                    Some(dashboard) => view! {
                        <StatCards data=dashboard.clone() />
                        <TodayReservations reservations=dashboard.today />
                    }.into_view(),
                    None => view! {}.into_view(),
                }
            }}
        </div>
    }
}

/// Total plus one card per status
#[component]
fn StatCards(data: DashboardData) -> impl IntoView {
    let stats = data.stats;
    let cards = [
        ("Pendientes", ReservationStatus::Pending),
        ("Confirmadas", ReservationStatus::Confirmed),
        ("Canceladas", ReservationStatus::Cancelled),
        ("Completadas", ReservationStatus::Completed),
    ];

    view! {
        <section class="grid grid-cols-2 md:grid-cols-5 gap-4">
            <StatCard label="Total Reservas" value=stats.total color=None />
            {cards
                .into_iter()
                .map(|(label, status)| view! {
                    <StatCard label=label value=stats.count(status) color=Some(status.color()) />
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: u32, color: Option<&'static str>) -> impl IntoView {
    let style = color.map(|c| format!("color: {}", c)).unwrap_or_default();

    view! {
        <div class="bg-white rounded-xl shadow p-5">
            <p class="text-gray-500 text-sm mb-2">{label}</p>
            <p class="text-3xl font-bold" style=style>{value}</p>
        </div>
    }
}

#[component]
fn TodayReservations(reservations: Vec<Reservation>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Reservas de Hoy"</h2>

            {if reservations.is_empty() {
                view! {
                    <p class="text-gray-500">"No hay reservas para hoy"</p>
                }.into_view()
            } else {
                view! {
                    <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {reservations
                            .into_iter()
                            .map(|reservation| view! { <TodayCard reservation=reservation /> })
                            .collect_view()}
                    </div>
                }.into_view()
            }}
        </section>
    }
}

#[component]
fn TodayCard(reservation: Reservation) -> impl IntoView {
    let table = reservation.table_label();
    let status = reservation.status;
    let notes = reservation.visible_notes().map(str::to_string);

    view! {
        <div class="border border-gray-200 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <span class="text-lg font-semibold">{table}</span>
                <span
                    class="px-2 py-1 rounded text-xs text-white"
                    style=format!("background-color: {}", status.color())
                >
                    {status.as_str().to_uppercase()}
                </span>
            </div>
            <p class="font-medium">{reservation.customer_name()}</p>
            <p class="text-sm text-gray-600">{format!("Hora: {}", format_api_time(reservation.time))}</p>
            <p class="text-sm text-gray-600">{format!("Personas: {}", reservation.party_size)}</p>
            {notes.map(|notes| view! {
                <p class="text-sm text-gray-500 mt-2">{format!("Notas: {}", notes)}</p>
            })}
        </div>
    }
}
