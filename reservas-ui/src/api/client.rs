//! HTTP API Client
//!
//! Functions for communicating with the reservation REST API. Paths and
//! payloads come from the shared `reservas` crate so the browser and the CLI
//! always agree on the wire format.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use reservas::endpoints::{Endpoint, Method};
use reservas::models::{
    ApiErrorBody, AvailabilityQuery, AvailabilityResponse, Customer, DashboardData, NewCustomer,
    NewReservation, NewTable, Reservation, Statistics, Table, TableUpdate,
};
use reservas::status::StatusAction;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Local storage key overriding [`DEFAULT_API_BASE`]
const API_URL_KEY: &str = "reservas_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// A failed API call.
///
/// Carries the server's own message when the response had one; pages fall
/// back to their generic message otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ApiFailure {
    fn network(error: gloo_net::Error) -> Self {
        web_sys::console::error_1(&format!("Network error: {}", error).into());
        Self {
            status: None,
            message: None,
        }
    }

    fn parse(error: gloo_net::Error) -> Self {
        web_sys::console::error_1(&format!("Parse error: {}", error).into());
        Self {
            status: None,
            message: None,
        }
    }

    /// Text for the error banner
    pub fn or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiFailure>;

// ============ Plumbing ============

fn request(endpoint: &Endpoint) -> RequestBuilder {
    let url = endpoint.url(&get_api_base());
    match endpoint.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    }
}

async fn check(endpoint: &Endpoint, response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::parse(&text).and_then(|body| body.message());
    web_sys::console::warn_1(
        &format!(
            "{} failed ({}): {}",
            endpoint,
            status,
            message.as_deref().unwrap_or("-")
        )
        .into(),
    );

    Err(ApiFailure {
        status: Some(status),
        message,
    })
}

async fn fetch<T: DeserializeOwned>(endpoint: Endpoint) -> ApiResult<T> {
    let response = request(&endpoint)
        .send()
        .await
        .map_err(ApiFailure::network)?;
    let response = check(&endpoint, response).await?;
    response.json().await.map_err(ApiFailure::parse)
}

async fn send<B: Serialize, T: DeserializeOwned>(endpoint: Endpoint, body: &B) -> ApiResult<T> {
    let response = request(&endpoint)
        .json(body)
        .map_err(ApiFailure::parse)?
        .send()
        .await
        .map_err(ApiFailure::network)?;
    let response = check(&endpoint, response).await?;
    response.json().await.map_err(ApiFailure::parse)
}

async fn call(endpoint: Endpoint) -> ApiResult<()> {
    let response = request(&endpoint)
        .send()
        .await
        .map_err(ApiFailure::network)?;
    check(&endpoint, response).await?;
    Ok(())
}

// ============ Tables ============

pub async fn fetch_tables() -> ApiResult<Vec<Table>> {
    fetch(Endpoint::list_tables()).await
}

pub async fn create_table(table: &NewTable) -> ApiResult<Table> {
    send(Endpoint::create_table(), table).await
}

pub async fn update_table(id: u32, update: &TableUpdate) -> ApiResult<Table> {
    send(Endpoint::update_table(id), update).await
}

pub async fn delete_table(id: u32) -> ApiResult<()> {
    call(Endpoint::delete_table(id)).await
}

// ============ Customers ============

pub async fn fetch_customers() -> ApiResult<Vec<Customer>> {
    fetch(Endpoint::list_customers()).await
}

/// Search by name; a blank term reloads the full list
pub async fn search_customers(name: &str) -> ApiResult<Vec<Customer>> {
    if name.trim().is_empty() {
        return fetch_customers().await;
    }
    fetch(Endpoint::search_customers(name)).await
}

pub async fn fetch_frequent_customers() -> ApiResult<Vec<Customer>> {
    fetch(Endpoint::frequent_customers()).await
}

/// All customers and the frequent ones, in parallel
pub async fn fetch_customer_overview() -> ApiResult<(Vec<Customer>, Vec<Customer>)> {
    futures_util::try_join!(fetch_customers(), fetch_frequent_customers())
}

pub async fn fetch_customer_history(id: u32) -> ApiResult<Vec<Reservation>> {
    fetch(Endpoint::customer_history(id)).await
}

pub async fn create_customer(customer: &NewCustomer) -> ApiResult<Customer> {
    send(Endpoint::create_customer(), customer).await
}

// ============ Reservations ============

/// All reservations, or only those of `date` (`YYYY-MM-DD`)
pub async fn fetch_reservations(date: Option<chrono::NaiveDate>) -> ApiResult<Vec<Reservation>> {
    match date {
        Some(date) => fetch(Endpoint::reservations_on(date)).await,
        None => fetch(Endpoint::list_reservations()).await,
    }
}

/// Today's reservations and the counters, in parallel
pub async fn fetch_dashboard() -> ApiResult<DashboardData> {
    let (today, stats) = futures_util::try_join!(
        fetch::<Vec<Reservation>>(Endpoint::reservations_today()),
        fetch::<Statistics>(Endpoint::reservation_stats()),
    )?;
    Ok(DashboardData { today, stats })
}

pub async fn check_availability(query: &AvailabilityQuery) -> ApiResult<AvailabilityResponse> {
    send(Endpoint::check_availability(), query).await
}

pub async fn create_reservation(reservation: &NewReservation) -> ApiResult<Reservation> {
    send(Endpoint::create_reservation(), reservation).await
}

/// Confirm, cancel or complete a reservation
pub async fn apply_action(id: u32, action: StatusAction) -> ApiResult<Reservation> {
    fetch(Endpoint::reservation_action(id, action)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_falls_back() {
        let failure = ApiFailure {
            status: Some(500),
            message: None,
        };
        assert_eq!(failure.or("Error al cargar las mesas"), "Error al cargar las mesas");

        let failure = ApiFailure {
            status: Some(409),
            message: Some("La mesa 2 ya existe".to_string()),
        };
        assert_eq!(failure.or("Error al guardar la mesa"), "La mesa 2 ya existe");
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_api_base_from_local_storage() {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .unwrap();

            storage.set_item(API_URL_KEY, "http://10.0.0.2:3000/api/").unwrap();
            assert_eq!(get_api_base(), "http://10.0.0.2:3000/api");

            storage.remove_item(API_URL_KEY).unwrap();
            assert_eq!(get_api_base(), DEFAULT_API_BASE);
        }
    }
}
