//! Spring launcher calculator: pure contraction math, an in-memory log of
//! past calculations, and a thin request-handler layer shared by the
//! front-ends. Keeping the logic in library crates lets multiple front-ends
//! (CLI, web, GUI) share it.

pub use launcher_api as api;
pub use launcher_contraction as contraction;
pub use launcher_core::{constants, grid, units};
pub use launcher_export as export;
pub use launcher_store as store;

/// Workspace version, handy for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
