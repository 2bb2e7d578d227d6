//! File-backed SQLite persistence for observation rows.
//!
//! Two near-duplicate stores over the same four measurement fields: one keys
//! rows by an auto-incrementing surrogate `id`, the other by the `radius`
//! field itself. Every operation opens its own connection, runs one
//! statement, and drops the connection.

pub mod natural;
pub mod surrogate;

use thiserror::Error;

pub use natural::NaturalStore;
pub use surrogate::SurrogateStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Constraint violations, connectivity issues, and malformed statements all
/// collapse into the one kind; callers only ever learn that the store
/// operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Calibration rows inserted when the observations table is first created
/// empty: (radius in degrees, rssivalue in dBm, lqivalue, throughput).
pub const SEED_OBSERVATIONS: [(i64, f64, f64, f64); 14] = [
    (0, -89.819, 100.722, 19922.9),
    (15, -91.5, 96.9965, 18479.0),
    (30, -93.1461, 91.743, 15394.9),
    (45, -93.5081, 89.2994, 14295.9),
    (60, -94.6927, 80.0528, 6612.38),
    (75, -94.9086, 79.1629, 6570.35),
    (240, -95.2276, 75.4519, 6810.52),
    (255, -93.691, 84.8017, 12266.3),
    (270, -91.7551, 95.2111, 16964.6),
    (285, -89.7337, 100.748, 20048.8),
    (300, -88.3193, 102.913, 20707.7),
    (315, -87.1499, 103.951, 20898.9),
    (330, -87.9427, 103.427, 20708.6),
    (345, -87.9416, 103.49, 20408.7),
];
