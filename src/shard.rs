//! The deterministic sharder.
//!
//! Sharding maps a stable string key to a group number in `[0, total_groups)`
//! by hashing the key and reducing the digest modulo the group count. The
//! result depends on nothing but the two inputs: no ordering between items,
//! no process state, no I/O. Two CI workers computing the assignment for the
//! same suite independently agree on every item's group.
//!
//! There is deliberately no consistent-hashing behavior here. Changing the
//! group count may move many items to different groups, which is fine for the
//! intended use: the group count is fixed for the duration of a CI run.

use std::num::NonZeroU64;

use sha2::{Digest, Sha256};

use crate::marker::GroupMarker;

/// Assign `item_key` to a group in `[0, total_groups)`.
///
/// The key is hashed with SHA-256 and the digest, read as a 256-bit unsigned
/// integer, is reduced modulo `total_groups`. The function is total over all
/// strings; the empty string is a legal key and hashes like any other.
///
/// With `total_groups == 1` every key lands in group 0, which is how a run
/// with sharding disabled behaves.
pub fn assign_group(item_key: &str, total_groups: NonZeroU64) -> u64 {
    let digest = Sha256::digest(item_key.as_bytes());
    digest_mod(&digest, total_groups.get())
}

/// Like [`assign_group`], but returns the group wrapped as a [`GroupMarker`].
pub fn assign_marker(item_key: &str, total_groups: NonZeroU64) -> GroupMarker {
    GroupMarker::new(assign_group(item_key, total_groups))
}

/// Reduce a big-endian digest modulo `modulus` without a bignum type.
///
/// Horner's scheme over the bytes: the accumulator stays below `modulus`,
/// so `acc * 256 + byte` fits comfortably in a `u128`.
fn digest_mod(digest: &[u8], modulus: u64) -> u64 {
    let modulus = u128::from(modulus);
    let mut acc: u128 = 0;
    for &byte in digest {
        acc = (acc * 256 + u128::from(byte)) % modulus;
    }
    acc as u64
}
