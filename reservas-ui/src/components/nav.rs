//! Navigation Component
//!
//! Sidebar with the restaurant name and one link per page.

use leptos::*;
use leptos_router::*;

/// Sidebar navigation component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="w-60 shrink-0 bg-white border-r border-gray-200 min-h-screen">
            <div class="h-16 flex items-center px-6 border-b border-gray-200">
                <span class="text-2xl mr-2">"🍽️"</span>
                <span class="text-lg font-bold">"Restaurante"</span>
            </div>

            <div class="py-4 space-y-1">
                <NavLink href="/" icon="📊" label="Dashboard" />
                <NavLink href="/nueva-reserva" icon="➕" label="Nueva Reserva" />
                <NavLink href="/mesas" icon="🪑" label="Gestión de Mesas" />
                <NavLink href="/clientes" icon="👥" label="Clientes" />
                <NavLink href="/reservas" icon="📅" label="Reservas" />
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center px-6 py-3 text-gray-700 hover:bg-gray-100 transition-colors"
            active_class="bg-primary-50 text-primary-700 font-medium"
        >
            <span class="mr-3">{icon}</span>
            <span>{label}</span>
        </A>
    }
}
