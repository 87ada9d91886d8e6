//! Platform abstraction layer for native/web compatibility.
//!
//! [`Storage`] abstracts the durable key-value store the collections are
//! saved to. Native builds keep one file per slot in a data directory; web
//! builds use the browser's LocalStorage.

mod storage;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use storage::{MemoryStorage, Storage, StorageError};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(feature = "web")]
pub use web::WebStorage;
