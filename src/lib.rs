//! Read-only inventory lookup service with optional synthetic CPU load.
//!
//! - **`catalog`**: the fixed item catalog and lookup by id.
//! - **`load`**: the busy-wait load generator driven by `x-compute`.
//! - **`fault`**: opt-in fault injection for lookups.
//! - **`api`**: the axum router, handlers and error envelope.

pub mod api;
pub mod catalog;
pub mod config;
pub mod fault;
pub mod load;
pub mod state;
pub mod telemetry;
