//! Pages
//!
//! Top-level page components for each route.

pub mod customers;
pub mod dashboard;
pub mod new_reservation;
pub mod reservations;
pub mod tables;

pub use customers::CustomerHistory;
pub use dashboard::Dashboard;
pub use new_reservation::NewReservation;
pub use reservations::ReservationList;
pub use tables::TableManagement;
