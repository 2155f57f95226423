//! Userdesk Dashboard - Leptos/WASM user workstation panel
//!
//! The main content area of the admin console's user workstation: quick
//! actions, user metrics, a paginated user directory and its pagination
//! controls. The panel renders what it is given and calls the handlers it is
//! given; data loading and the actions themselves live with the caller.

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod types;

#[cfg(feature = "csr")]
pub mod demo;

pub use components::RefreshFuture;
pub use config::{PanelConfig, DEFAULT_PAGE_SIZE};
pub use error::RefreshError;
pub use pages::WorkstationPanel;
pub use types::{StatsSummary, UserRecord};

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(demo::DemoApp);
}
