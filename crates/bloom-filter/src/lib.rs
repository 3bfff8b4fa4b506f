//! # Bloom Membership Filter
//!
//! Fixed-capacity probabilistic set-membership filter: answers "might this
//! element have been inserted?" with no false negatives and a bounded
//! false-positive rate, in far less memory than an exact set.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: the filter facade (insert / contains / statistics)
//!   - `BitArray`: fixed-size bit store, allocated once, never resized
//!   - `hash`: 128-bit MurmurHash3 expanded into k bit indices via double
//!     hashing (Kirsch-Mitzenmacher)
//!   - `FilterConfig` / `FilterConfigBuilder`: validated construction
//!     parameters (capacity, hash count, seed, input-length bound)
//!
//! - **Ports** (`ports.rs`): the `MembershipFilter` capability trait that
//!   future filter variants (counting, cuckoo) would also implement
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: No false negatives - once inserted, `contains()` MUST
//!   return true
//! - **INVARIANT-2**: Monotonic bits - no operation clears a set bit; there
//!   is no removal, resizing, or persistence
//! - **INVARIANT-3**: Every derived bit index lies in `[0, capacity_bits)`
//!
//! ## Concurrency
//!
//! Deliberately **not** thread-safe: there is no internal synchronization,
//! and the common single-threaded case pays no locking cost. For concurrent
//! use, wrap the filter in an external lock, or shard the key space across
//! independent filter instances and OR the membership answers per key
//! (never merge raw bit arrays of differently-parameterized shards).
//!
//! ## Usage Example
//!
//! ```ignore
//! use bloom_filter::{BloomFilter, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity_bits(1 << 20)
//!     .hash_count(8)
//!     .seed(7)
//!     .build()?;
//!
//! let mut filter = BloomFilter::new(config)?;
//! filter.insert(b"starship")?;
//!
//! assert!(filter.contains(b"starship")?);   // always true once inserted
//! assert!(!filter.contains(b"rocket")?);    // false, barring a false positive
//! ```

pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use domain::{
    bit_indexes, calculate_fpr, BitArray, BitIndexes, BloomFilter, FilterConfig,
    FilterConfigBuilder, IndexHasher, Murmur3,
};
pub use error::FilterError;
pub use ports::MembershipFilter;
