//! radioprop - a record-keeping HTTP service for radio propagation observations
//!
//! One SQLite table of (radius, rssivalue, lqivalue, throughput) rows behind
//! four CRUD routes. The table is keyed either by an auto-incrementing
//! surrogate `id` or by the `radius` field itself, selected at boot.

pub mod cli;
pub mod http_server;
pub mod store;
