//! Observation store keyed by the `radius` field itself.

use std::path::PathBuf;

use rusqlite::{params, Connection};

use super::{StoreResult, SEED_OBSERVATIONS};

const SCHEMA: &str = "
    -- Stores all propagation observations, keyed by radius.
    CREATE TABLE IF NOT EXISTS observations (
        radius INTEGER PRIMARY KEY,
        rssivalue REAL,
        lqivalue REAL,
        throughput REAL
    );
";

/// One persisted observation row.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub radius: i64,
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

/// The measurement fields of an observation, without the radius key.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationValues {
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

/// Radius-keyed observation store.
///
/// Near-duplicate of [`super::SurrogateStore`]: the only differences are the
/// missing surrogate column and the primary-key constraint on `radius`, which
/// makes a second insert of the same radius fail at the store level.
#[derive(Debug, Clone)]
pub struct NaturalStore {
    path: PathBuf,
}

impl NaturalStore {
    /// Create a store over the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Ensure the observations table exists and seed it with the calibration
    /// rows when it is empty. Idempotent: re-running against a non-empty
    /// table is a no-op.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute_batch(SCHEMA)?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?;
        if count == 0 {
            let mut stmt = conn.prepare(
                "INSERT INTO observations (radius, rssivalue, lqivalue, throughput) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (radius, rssivalue, lqivalue, throughput) in SEED_OBSERVATIONS {
                stmt.execute(params![radius, rssivalue, lqivalue, throughput])?;
            }
        }
        Ok(())
    }

    /// Select all rows, in store-native order (no ORDER BY).
    pub fn list(&self) -> StoreResult<Vec<Observation>> {
        let conn = self.open()?;
        let mut stmt =
            conn.prepare("SELECT radius, rssivalue, lqivalue, throughput FROM observations")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Observation {
                    radius: row.get(0)?,
                    rssivalue: row.get(1)?,
                    lqivalue: row.get(2)?,
                    throughput: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Insert one row. The primary-key constraint on `radius` rejects a
    /// radius that already exists; that store error is the only duplicate
    /// prevention there is.
    pub fn insert(&self, observation: &Observation) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO observations (radius, rssivalue, lqivalue, throughput) VALUES (?1, ?2, ?3, ?4)",
            params![
                observation.radius,
                observation.rssivalue,
                observation.lqivalue,
                observation.throughput
            ],
        )?;
        Ok(())
    }

    /// Replace the non-key fields of the row with the given radius.
    ///
    /// Zero matched rows is not detected: updating a missing radius succeeds
    /// without touching anything.
    pub fn update(&self, radius: i64, values: &ObservationValues) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute(
            "UPDATE observations SET rssivalue = ?1, lqivalue = ?2, throughput = ?3 WHERE radius = ?4",
            params![values.rssivalue, values.lqivalue, values.throughput, radius],
        )?;
        Ok(())
    }

    /// Delete the row with the given radius. Zero-row deletes succeed as well.
    pub fn delete(&self, radius: i64) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM observations WHERE radius = ?1", params![radius])?;
        Ok(())
    }

    /// Number of rows in the table.
    pub fn count(&self) -> StoreResult<i64> {
        let conn = self.open()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?)
    }
}
