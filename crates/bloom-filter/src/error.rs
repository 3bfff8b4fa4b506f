//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur constructing or operating a Bloom filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Filter capacity exceeds maximum: {bits} > {max} bits")]
    CapacityTooLarge { bits: u64, max: u64 },

    #[error("Filter capacity must be at least 1 bit")]
    ZeroCapacity,

    #[error("Invalid hash count: {count} (must be between 1 and {max})")]
    InvalidHashCount { count: u32, max: u32 },

    #[error("Failed to allocate {bytes} bytes for the bit array")]
    AllocationFailed { bytes: usize },

    #[error("Element too large: {len} > {max} bytes")]
    ElementTooLarge { len: usize, max: usize },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}
