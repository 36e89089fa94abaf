//! Reservation API Endpoints
//!
//! The catalogue of REST calls the application makes, independent of the
//! HTTP transport. The native client (`reqwest`) and the browser client
//! (`gloo-net`) both build their requests from these.

use chrono::NaiveDate;
use std::fmt;

use crate::format::format_api_date;
use crate::status::StatusAction;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// A method plus a path (with query string) relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Absolute URL against `base` (trailing slashes on the base are ignored)
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    // ---------- Tables ----------

    pub fn list_tables() -> Self {
        Self::new(Method::Get, "/mesas")
    }

    pub fn available_tables() -> Self {
        Self::new(Method::Get, "/mesas?disponibles=true")
    }

    pub fn tables_with_capacity(min_capacity: u32) -> Self {
        Self::new(Method::Get, format!("/mesas?capacidadMinima={}", min_capacity))
    }

    pub fn create_table() -> Self {
        Self::new(Method::Post, "/mesas")
    }

    pub fn update_table(id: u32) -> Self {
        Self::new(Method::Patch, format!("/mesas/{}", id))
    }

    pub fn delete_table(id: u32) -> Self {
        Self::new(Method::Delete, format!("/mesas/{}", id))
    }

    // ---------- Customers ----------

    pub fn list_customers() -> Self {
        Self::new(Method::Get, "/clientes")
    }

    pub fn search_customers(name: &str) -> Self {
        Self::new(
            Method::Get,
            format!("/clientes?nombre={}", urlencoding::encode(name.trim())),
        )
    }

    pub fn frequent_customers() -> Self {
        Self::new(Method::Get, "/clientes/frecuentes")
    }

    pub fn customer_history(id: u32) -> Self {
        Self::new(Method::Get, format!("/clientes/{}/historial", id))
    }

    pub fn create_customer() -> Self {
        Self::new(Method::Post, "/clientes")
    }

    pub fn update_customer(id: u32) -> Self {
        Self::new(Method::Patch, format!("/clientes/{}", id))
    }

    // ---------- Reservations ----------

    pub fn list_reservations() -> Self {
        Self::new(Method::Get, "/reservas")
    }

    pub fn reservations_on(date: NaiveDate) -> Self {
        Self::new(Method::Get, format!("/reservas?fecha={}", format_api_date(date)))
    }

    pub fn reservations_today() -> Self {
        Self::new(Method::Get, "/reservas/hoy")
    }

    pub fn reservation_stats() -> Self {
        Self::new(Method::Get, "/reservas/estadisticas")
    }

    pub fn check_availability() -> Self {
        Self::new(Method::Post, "/reservas/disponibilidad")
    }

    pub fn create_reservation() -> Self {
        Self::new(Method::Post, "/reservas")
    }

    pub fn update_reservation(id: u32) -> Self {
        Self::new(Method::Patch, format!("/reservas/{}", id))
    }

    /// `PATCH /reservas/:id/confirmar|cancelar|completar`
    pub fn reservation_action(id: u32, action: StatusAction) -> Self {
        Self::new(
            Method::Patch,
            format!("/reservas/{}/{}", id, action.path_segment()),
        )
    }

    pub fn delete_reservation(id: u32) -> Self {
        Self::new(Method::Delete, format!("/reservas/{}", id))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        let endpoint = Endpoint::list_tables();
        assert_eq!(endpoint.url("http://localhost:3000/api/"), "http://localhost:3000/api/mesas");
        assert_eq!(endpoint.url("http://localhost:3000/api"), "http://localhost:3000/api/mesas");
    }

    #[test]
    fn test_search_is_url_encoded() {
        let endpoint = Endpoint::search_customers(" José Luis ");
        assert_eq!(endpoint.method, Method::Get);
        assert_eq!(endpoint.path, "/clientes?nombre=Jos%C3%A9%20Luis");
    }

    #[test]
    fn test_reservation_paths() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 9).unwrap();
        assert_eq!(Endpoint::reservations_on(date).path, "/reservas?fecha=2025-02-09");

        let action = Endpoint::reservation_action(7, StatusAction::Complete);
        assert_eq!(action.to_string(), "PATCH /reservas/7/completar");

        assert_eq!(Endpoint::delete_reservation(7).method, Method::Delete);
        assert_eq!(Endpoint::tables_with_capacity(6).path, "/mesas?capacidadMinima=6");
    }
}
