//! # Reservas
//!
//! Front-end for a restaurant reservation system. The REST API that owns the
//! data lives elsewhere; this crate holds everything a client needs to talk
//! to it.
//!
//! ## Modules
//!
//! - [`models`]: Tables, customers, reservations and the API payloads
//! - [`status`]: Reservation lifecycle, allowed actions and badge tones
//! - [`endpoints`]: Paths and methods of every API call
//! - [`validation`]: Form validation for tables, customers and reservations
//! - [`lookup`]: Availability lookup bookkeeping (debounce, stale responses)
//! - [`format`]: Date and time wire/display formats
//! - [`api`]: Async HTTP client (`native` feature)
//! - [`config`] / [`logging`]: Settings and tracing setup (`native` feature)
//!
//! The browser UI (`reservas-ui`) builds on the same modules with
//! `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reservas::api::ApiClient;
//! use reservas::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ApiClient::new(config.api.client_config())?;
//!
//!     let dashboard = client.dashboard().await?;
//!     println!("{} reservations today", dashboard.today.len());
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod format;
pub mod lookup;
pub mod models;
pub mod status;
pub mod validation;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use endpoints::{Endpoint, Method};

pub use models::{
    AvailabilityQuery, AvailabilityResponse, Customer, CustomerUpdate, DashboardData,
    NewCustomer, NewReservation, NewTable, Reservation, ReservationUpdate, Statistics, Table,
    TableUpdate,
};

pub use status::{BadgeTone, ReservationStatus, StatusAction};

pub use validation::{CustomerForm, FieldErrors, ReservationForm, TableForm};

pub use lookup::{AvailabilityLookup, LookupTicket, AVAILABILITY_DEBOUNCE_MS};

#[cfg(feature = "native")]
pub use api::{ApiClient, ClientConfig, ClientError, ClientResult};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
