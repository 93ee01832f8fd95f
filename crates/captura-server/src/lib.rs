//! Captura HTTP server.
//!
//! Wires the intake service and a document store into a running Axum
//! server. Serves the landing page at `/`, the submissions dashboard at
//! `/dashboard`, and the JSON API at `/submit` and `/submissions`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
