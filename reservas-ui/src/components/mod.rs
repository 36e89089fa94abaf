//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod alert;
pub mod badge;
pub mod field;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod toast;

pub use alert::{ErrorBanner, SuccessBanner};
pub use badge::{Badge, StatusBadge};
pub use field::{FormField, INPUT_CLASS};
pub use loading::{InlineLoading, Loading};
pub use modal::Modal;
pub use nav::Nav;
pub use toast::Toast;
