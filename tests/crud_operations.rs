//! CRUD Operation Tests
//!
//! Store-level behavior behind the four routes, including the known gap:
//! zero-row updates and deletes report success and are indistinguishable
//! from real ones. The tests document that behavior rather than fix it.

use radioprop::store::natural::{self, NaturalStore, ObservationValues};
use radioprop::store::surrogate::{NewObservation, SurrogateStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn surrogate_store() -> (TempDir, SurrogateStore) {
    let tmp = TempDir::new().unwrap();
    let store = SurrogateStore::new(tmp.path().join("observations.db"));
    store.initialize().unwrap();
    (tmp, store)
}

fn natural_store() -> (TempDir, NaturalStore) {
    let tmp = TempDir::new().unwrap();
    let store = NaturalStore::new(tmp.path().join("observations.db"));
    store.initialize().unwrap();
    (tmp, store)
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// Create then list: the new row carries the submitted values unchanged,
/// reals preserved at stored precision.
#[test]
fn test_surrogate_create_list_round_trip() {
    let (_tmp, store) = surrogate_store();

    store
        .insert(&NewObservation {
            radius: 100,
            rssivalue: -90.0,
            lqivalue: 95.0,
            throughput: 15000.0,
        })
        .unwrap();

    let rows = store.list().unwrap();
    let row = rows.iter().find(|o| o.radius == 100).unwrap();
    assert_eq!(row.rssivalue, -90.0);
    assert_eq!(row.lqivalue, 95.0);
    assert_eq!(row.throughput, 15000.0);
}

#[test]
fn test_natural_create_list_round_trip() {
    let (_tmp, store) = natural_store();

    let observation = natural::Observation {
        radius: 100,
        rssivalue: -90.0,
        lqivalue: 95.0,
        throughput: 15000.0,
    };
    store.insert(&observation).unwrap();

    let rows = store.list().unwrap();
    assert!(rows.contains(&observation));
}

/// Fractional seed-style values survive the round trip bit-for-bit.
#[test]
fn test_round_trip_preserves_real_precision() {
    let (_tmp, store) = surrogate_store();

    store
        .insert(&NewObservation {
            radius: 105,
            rssivalue: -92.8413,
            lqivalue: 97.0012,
            throughput: 16431.77,
        })
        .unwrap();

    let rows = store.list().unwrap();
    let row = rows.iter().find(|o| o.radius == 105).unwrap();
    assert_eq!(row.rssivalue, -92.8413);
    assert_eq!(row.lqivalue, 97.0012);
    assert_eq!(row.throughput, 16431.77);
}

// =============================================================================
// Zero-Row Update/Delete Tests (known gap, preserved deliberately)
// =============================================================================

/// Updating an id that matches nothing succeeds without altering row count
/// or any existing row.
#[test]
fn test_surrogate_update_missing_id_is_silent_noop() {
    let (_tmp, store) = surrogate_store();

    let before = store.list().unwrap();
    store
        .update(
            9999,
            &NewObservation {
                radius: 1,
                rssivalue: -1.0,
                lqivalue: 1.0,
                throughput: 1.0,
            },
        )
        .unwrap();
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn test_natural_update_missing_radius_is_silent_noop() {
    let (_tmp, store) = natural_store();

    let before = store.list().unwrap();
    store
        .update(
            7,
            &ObservationValues {
                rssivalue: -1.0,
                lqivalue: 1.0,
                throughput: 1.0,
            },
        )
        .unwrap();
    assert_eq!(store.list().unwrap(), before);
}

/// Deleting a missing key succeeds and leaves the count unchanged; deleting
/// an existing key removes exactly one row.
#[test]
fn test_delete_counts() {
    let (_tmp, store) = surrogate_store();

    store.delete(9999).unwrap();
    assert_eq!(store.count().unwrap(), 14);

    store.delete(1).unwrap();
    assert_eq!(store.count().unwrap(), 13);
}

// =============================================================================
// Key Semantics Tests
// =============================================================================

/// The surrogate store accepts the same radius twice as two rows; the
/// natural store rejects the second insert at the primary key.
#[test]
fn test_duplicate_radius_semantics_differ_by_key_mode() {
    let (_tmp, surrogate) = surrogate_store();
    let observation = NewObservation {
        radius: 100,
        rssivalue: -90.0,
        lqivalue: 95.0,
        throughput: 15000.0,
    };
    surrogate.insert(&observation).unwrap();
    surrogate.insert(&observation).unwrap();
    assert_eq!(surrogate.count().unwrap(), 16);

    let (_tmp, natural) = natural_store();
    let observation = natural::Observation {
        radius: 100,
        rssivalue: -90.0,
        lqivalue: 95.0,
        throughput: 15000.0,
    };
    natural.insert(&observation).unwrap();
    assert!(natural.insert(&observation).is_err());
    assert_eq!(natural.count().unwrap(), 15);
}
