//! Domain layer - pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash expansion (double hashing)
//! - Fixed-size bit store
//! - Configuration with validation
//! - False-positive rate estimation
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bit_array;
pub mod bloom_filter;
pub mod config;
pub mod hash;
pub mod parameters;

pub use bit_array::BitArray;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash::{bit_indexes, BitIndexes, IndexHasher, Murmur3};
pub use parameters::calculate_fpr;
