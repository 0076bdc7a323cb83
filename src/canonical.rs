//! Canonical serialization for deterministic hashing.
//!
//! Graph snapshots, policy parameters and analysis reports are hashed by
//! serializing them to JSON and running xxh64 over the bytes.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: Struct fields serialize in declaration order
//! - Stable collection order: only `Vec`, `BTreeSet` and `BTreeMap` are hashed
//! - No HashMap allowed in hashed data

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes for hashing.
///
/// Panics if `value` has no JSON form, such as a map with non-string keys.
/// Every hashed type in this crate serializes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
