//! Hash expansion for the Bloom filter
//!
//! A single 128-bit MurmurHash3 computation per element, expanded into k bit
//! indices with double hashing (Kirsch-Mitzenmacher): h(i) = h1 + i * h2.
//! This simulates k independent hash functions from two hash values instead
//! of paying for k hash computations.

use std::io::Cursor;

/// Strategy for producing the two 64-bit base hashes of an element.
///
/// Implementations must be deterministic: the same element and seed always
/// produce the same pair. Cryptographic strength is not required; speed and
/// distribution quality are.
pub trait IndexHasher {
    /// Hash the element's raw bytes with the given seed, returning the low
    /// and high halves of a 128-bit hash as `(h1, h2)`.
    fn hash128(&self, element: &[u8], seed: u32) -> (u64, u64);
}

/// MurmurHash3 x64_128, the default hash strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3;

impl IndexHasher for Murmur3 {
    fn hash128(&self, element: &[u8], seed: u32) -> (u64, u64) {
        let mut cursor = Cursor::new(element);
        // Reading from an in-memory cursor cannot fail
        let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
        (hash as u64, (hash >> 64) as u64)
    }
}

/// Iterator over the k bit indices derived from one element's hash pair.
///
/// Yields exactly `hash_count` indices, each in `[0, capacity_bits)`.
/// Distinct rounds may collide on the same index; that is legitimate and not
/// deduplicated, since setting or testing a bit is idempotent.
#[derive(Clone, Debug)]
pub struct BitIndexes {
    h1: u64,
    h2: u64,
    capacity_bits: u64,
    remaining: u32,
    round: u64,
}

impl Iterator for BitIndexes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let hash = self.h1.wrapping_add(self.round.wrapping_mul(self.h2));
        self.round += 1;
        self.remaining -= 1;
        Some(hash % self.capacity_bits)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIndexes {}

/// Expand a hash pair into `hash_count` bit indices via double hashing.
///
/// `capacity_bits` must be non-zero; config validation guarantees this.
pub fn bit_indexes(h1: u64, h2: u64, hash_count: u32, capacity_bits: u64) -> BitIndexes {
    debug_assert!(capacity_bits > 0, "capacity_bits must be non-zero");
    BitIndexes {
        h1,
        h2,
        capacity_bits,
        remaining: hash_count,
        round: 0,
    }
}
