//! Observation store keyed by an auto-incrementing surrogate `id`.

use std::path::PathBuf;

use rusqlite::{params, Connection};

use super::{StoreResult, SEED_OBSERVATIONS};

const SCHEMA: &str = "
    -- Stores all propagation observations, keyed by a surrogate id.
    CREATE TABLE IF NOT EXISTS observations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        radius INTEGER,
        rssivalue REAL,
        lqivalue REAL,
        throughput REAL
    );
";

/// One persisted observation row.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub id: i64,
    pub radius: i64,
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

/// Field values for an observation, without the key.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObservation {
    pub radius: i64,
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

/// Surrogate-keyed observation store.
///
/// Holds only the database location; each operation opens a fresh
/// connection, which is released on every exit path when it drops.
#[derive(Debug, Clone)]
pub struct SurrogateStore {
    path: PathBuf,
}

impl SurrogateStore {
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
            conn.prepare("SELECT id, radius, rssivalue, lqivalue, throughput FROM observations")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Observation {
                    id: row.get(0)?,
                    radius: row.get(1)?,
                    rssivalue: row.get(2)?,
                    lqivalue: row.get(3)?,
                    throughput: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Insert one row; the key is auto-assigned by the store.
    pub fn insert(&self, observation: &NewObservation) -> StoreResult<()> {
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

    /// Replace every field of the row with the given id.
    ///
    /// Zero matched rows is not detected: updating a missing id succeeds
    /// without touching anything.
    pub fn update(&self, id: i64, observation: &NewObservation) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute(
            "UPDATE observations SET radius = ?1, rssivalue = ?2, lqivalue = ?3, throughput = ?4 WHERE id = ?5",
            params![
                observation.radius,
                observation.rssivalue,
                observation.lqivalue,
                observation.throughput,
                id
            ],
        )?;
        Ok(())
    }

    /// Delete the row with the given id. Zero-row deletes succeed as well.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM observations WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Number of rows in the table.
    pub fn count(&self) -> StoreResult<i64> {
        let conn = self.open()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?)
    }
}
