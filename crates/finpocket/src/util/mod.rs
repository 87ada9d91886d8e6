pub mod common;
pub mod format;
pub mod io;
