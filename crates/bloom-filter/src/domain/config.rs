//! Filter configuration and validation
//!
//! Capacity, hash count, and seed are explicit immutable construction
//! parameters rather than hidden constants, so callers can size a filter for
//! their own workload.
//!
//! # Example
//!
//! ```ignore
//! use bloom_filter::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity_bits(1 << 20)
//!     .hash_count(8)
//!     .seed(7)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Upper bound on filter capacity (1 TiB of bits). Guards against
/// configuration typos turning into absurd allocations.
pub const MAX_CAPACITY_BITS: u64 = 1 << 43;

/// Upper bound on the number of hash functions per element.
pub const MAX_HASH_COUNT: u32 = 64;

/// Default input-length bound: elements longer than this are rejected.
pub const DEFAULT_MAX_ELEMENT_BYTES: usize = 1 << 20;

/// Bloom filter configuration
///
/// Defaults match the reference configuration: 209,715,200 bits (25 MiB)
/// and 8 hash rounds, sized for ~10 million elements at a 1e-4 false
/// positive rate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Total number of bits in the filter (m)
    pub capacity_bits: u64,
    /// Number of bit indices derived per element (k)
    pub hash_count: u32,
    /// Seed mixed into the hash computation, constant for the filter's lifetime
    pub seed: u32,
    /// Maximum accepted element length in bytes; longer input is rejected
    pub max_element_bytes: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity_bits: 209_715_200, // 25 MiB
            hash_count: 8,
            seed: 7,
            max_element_bytes: DEFAULT_MAX_ELEMENT_BYTES,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity_bits: u64, hash_count: u32, seed: u32) -> Result<Self, FilterError> {
        let config = Self {
            capacity_bits,
            hash_count,
            seed,
            max_element_bytes: DEFAULT_MAX_ELEMENT_BYTES,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity_bits == 0 {
            return Err(FilterError::ZeroCapacity);
        }

        if self.capacity_bits > MAX_CAPACITY_BITS {
            return Err(FilterError::CapacityTooLarge {
                bits: self.capacity_bits,
                max: MAX_CAPACITY_BITS,
            });
        }

        if self.hash_count == 0 || self.hash_count > MAX_HASH_COUNT {
            return Err(FilterError::InvalidHashCount {
                count: self.hash_count,
                max: MAX_HASH_COUNT,
            });
        }

        if self.max_element_bytes == 0 {
            return Err(FilterError::InvalidParameters(
                "max_element_bytes cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for FilterConfig with validation
///
/// # Example
///
/// ```ignore
/// let config = FilterConfigBuilder::new()
///     .capacity_bits(100_000)
///     .hash_count(5)
///     .seed(42)
///     .max_element_bytes(4096)
///     .build()?;
/// ```
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity_bits: Option<u64>,
    hash_count: Option<u32>,
    seed: Option<u32>,
    max_element_bytes: Option<usize>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter capacity in bits (must be between 1 and MAX_CAPACITY_BITS)
    pub fn capacity_bits(mut self, bits: u64) -> Self {
        self.capacity_bits = Some(bits);
        self
    }

    /// Set the number of hash rounds per element (1 to MAX_HASH_COUNT)
    pub fn hash_count(mut self, count: u32) -> Self {
        self.hash_count = Some(count);
        self
    }

    /// Set the hash seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum accepted element length in bytes
    pub fn max_element_bytes(mut self, bytes: usize) -> Self {
        self.max_element_bytes = Some(bytes);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            capacity_bits: self.capacity_bits.unwrap_or(defaults.capacity_bits),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
            seed: self.seed.unwrap_or(defaults.seed),
            max_element_bytes: self.max_element_bytes.unwrap_or(defaults.max_element_bytes),
        };

        config.validate()?;
        Ok(config)
    }
}
