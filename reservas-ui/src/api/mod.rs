//! API Access
//!
//! HTTP calls to the reservation REST API from the browser.

mod client;

pub use client::*;
