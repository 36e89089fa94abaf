//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{CustomerHistory, Dashboard, NewReservation, ReservationList, TableManagement};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex">
                // Sidebar navigation
                <Nav />

                <div class="flex-1 flex flex-col">
                    <header class="bg-primary-700 text-white shadow">
                        <div class="px-6 h-16 flex items-center">
                            <h1 class="text-xl font-semibold">"Sistema de Reservas - Restaurante"</h1>
                        </div>
                    </header>

                    <main class="flex-1 px-6 py-8">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/nueva-reserva" view=NewReservation />
                            <Route path="/mesas" view=TableManagement />
                            <Route path="/clientes" view=CustomerHistory />
                            <Route path="/reservas" view=ReservationList />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🍽️"</div>
            <h1 class="text-3xl font-bold mb-2">"Página no encontrada"</h1>
            <p class="text-gray-500 mb-6">"La página que busca no existe."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
            >
                "Ir al Dashboard"
            </A>
        </div>
    }
}
