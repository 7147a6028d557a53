//! Application runtime
//!
//! The composition root: owns the store and wires it into the HTTP server.

pub mod server;

pub use server::{AppState, build_app_state, run_server};
