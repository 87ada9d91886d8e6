//! Personal finance pocket tracker
//!
//! Binds the [`finpocket_core`] tracker to durable storage and provides the
//! native command-line host and the browser entry point.

pub mod data;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod util;

#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod logging;

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "native")]
pub use logging::init_logging;

pub use data::settings::Settings;
pub use session::Session;

/// Initialize logging to the browser console
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
