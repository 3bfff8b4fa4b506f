//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once inserted, `contains()` MUST return true
//! - Monotonic bits: no operation ever clears a set bit
//! - Every derived index lies in [0, capacity_bits)
//!
//! # Concurrency
//!
//! Deliberately single-threaded: no internal synchronization, insert takes
//! `&mut self`. Callers needing concurrent access must wrap the filter in an
//! external lock, or shard the key space across independent filter instances
//! and OR the membership answers.

use tracing::{debug, warn};

use super::bit_array::BitArray;
use super::config::FilterConfig;
use super::hash::{bit_indexes, IndexHasher, Murmur3};
use super::parameters::calculate_fpr;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Fixed-capacity Bloom filter for probabilistic membership testing.
///
/// Answers "might this element have been inserted?" with no false negatives
/// and a bounded false-positive rate. Capacity, hash count, and seed are
/// fixed at construction; there is no removal, resizing, or persistence.
///
/// Elements are raw byte sequences. Hashing operates on the bytes as given,
/// so text membership is case-sensitive and any normalization (case folding,
/// locale collation) is the caller's concern.
#[derive(Clone, Debug)]
pub struct BloomFilter<H: IndexHasher = Murmur3> {
    config: FilterConfig,
    bits: BitArray,
    hasher: H,
    /// Count of bits set to 1 (for statistics)
    bits_set: u64,
    /// Number of insert operations performed (n)
    elements_inserted: u64,
    saturation_logged: bool,
}

impl BloomFilter<Murmur3> {
    /// Create an empty filter with the default MurmurHash3 strategy.
    ///
    /// Validates the configuration and allocates the zeroed bit array.
    /// Allocation failure surfaces as `FilterError::AllocationFailed`.
    pub fn new(config: FilterConfig) -> Result<Self, FilterError> {
        Self::with_hasher(config, Murmur3)
    }
}

impl<H: IndexHasher> BloomFilter<H> {
    /// Create an empty filter with a caller-supplied hash strategy.
    pub fn with_hasher(config: FilterConfig, hasher: H) -> Result<Self, FilterError> {
        config.validate()?;
        let bits = BitArray::new(config.capacity_bits)?;

        debug!(
            capacity_bits = config.capacity_bits,
            hash_count = config.hash_count,
            seed = config.seed,
            "Bloom filter created"
        );

        Ok(Self {
            config,
            bits,
            hasher,
            bits_set: 0,
            elements_inserted: 0,
            saturation_logged: false,
        })
    }

    /// Insert an element into the filter.
    ///
    /// Sets up to `hash_count` bits (fewer when derived indices collide).
    /// Idempotent: re-inserting an element leaves the bit array unchanged.
    /// After insertion, `contains(element)` is guaranteed to return true.
    ///
    /// Rejects elements longer than the configured `max_element_bytes`.
    pub fn insert(&mut self, element: &[u8]) -> Result<(), FilterError> {
        self.check_element(element)?;

        let (h1, h2) = self.hasher.hash128(element, self.config.seed);
        for index in bit_indexes(h1, h2, self.config.hash_count, self.config.capacity_bits) {
            if self.bits.set(index) {
                self.bits_set += 1;
            }
        }
        self.elements_inserted += 1;

        if !self.saturation_logged && self.bits_set * 2 >= self.config.capacity_bits {
            self.saturation_logged = true;
            warn!(
                bits_set = self.bits_set,
                capacity_bits = self.config.capacity_bits,
                "Bloom filter is over half full; false positive rate is degrading"
            );
        }

        Ok(())
    }

    /// Test whether an element might be in the filter.
    ///
    /// Returns:
    /// - `Ok(true)`: the element was **possibly** inserted (or is a false positive)
    /// - `Ok(false)`: the element was **definitely not** inserted
    ///
    /// True only when every one of the `hash_count` derived bits is set;
    /// short-circuits on the first unset bit.
    ///
    /// Rejects elements longer than the configured `max_element_bytes`.
    pub fn contains(&self, element: &[u8]) -> Result<bool, FilterError> {
        self.check_element(element)?;

        let (h1, h2) = self.hasher.hash128(element, self.config.seed);
        let all_set = bit_indexes(h1, h2, self.config.hash_count, self.config.capacity_bits)
            .all(|index| self.bits.test(index));
        Ok(all_set)
    }

    fn check_element(&self, element: &[u8]) -> Result<(), FilterError> {
        if element.len() > self.config.max_element_bytes {
            return Err(FilterError::ElementTooLarge {
                len: element.len(),
                max: self.config.max_element_bytes,
            });
        }
        Ok(())
    }

    /// Get the filter capacity in bits (m)
    pub fn capacity_bits(&self) -> u64 {
        self.config.capacity_bits
    }

    /// Get the number of hash rounds per element (k)
    pub fn hash_count(&self) -> u32 {
        self.config.hash_count
    }

    /// Get the hash seed
    pub fn seed(&self) -> u32 {
        self.config.seed
    }

    /// Get the number of bits currently set
    pub fn bits_set(&self) -> u64 {
        self.bits_set
    }

    /// Get the number of insert operations performed (n)
    pub fn elements_inserted(&self) -> u64 {
        self.elements_inserted
    }

    /// Whether no element has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.bits_set == 0
    }

    /// Fraction of bits set, in [0, 1].
    ///
    /// Values near 0.5 indicate the filter is approaching saturation.
    pub fn load_factor(&self) -> f64 {
        self.bits_set as f64 / self.config.capacity_bits as f64
    }

    /// Estimate the current false positive rate.
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k, with n the insert count.
    pub fn false_positive_rate(&self) -> f64 {
        calculate_fpr(
            self.config.capacity_bits,
            self.elements_inserted,
            self.config.hash_count,
        )
    }
}

impl<H: IndexHasher> MembershipFilter for BloomFilter<H> {
    fn insert(&mut self, element: &[u8]) -> Result<(), FilterError> {
        BloomFilter::insert(self, element)
    }

    fn contains(&self, element: &[u8]) -> Result<bool, FilterError> {
        BloomFilter::contains(self, element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::FilterConfigBuilder;

    fn small_config() -> FilterConfig {
        FilterConfigBuilder::new()
            .capacity_bits(10_000)
            .hash_count(7)
            .seed(7)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_creates_empty_filter() {
        let filter = BloomFilter::new(small_config()).unwrap();

        assert_eq!(filter.capacity_bits(), 10_000);
        assert_eq!(filter.hash_count(), 7);
        assert_eq!(filter.seed(), 7);
        assert_eq!(filter.bits_set(), 0, "All bits should be zero initially");
        assert_eq!(filter.elements_inserted(), 0);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_insert_sets_at_most_k_bits() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        filter.insert(b"test_element").unwrap();

        assert!(filter.bits_set() > 0, "Insert should set some bits");
        assert!(
            filter.bits_set() <= 7,
            "At most k=7 bits should be set for one element"
        );
        assert_eq!(filter.elements_inserted(), 1);
    }

    #[test]
    fn test_contains_after_insert() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        filter.insert(b"element_a").unwrap();

        assert!(
            filter.contains(b"element_a").unwrap(),
            "No false negatives: contains() must be true for an inserted element"
        );
    }

    #[test]
    fn test_empty_filter_contains_nothing() {
        let filter = BloomFilter::new(small_config()).unwrap();

        assert!(!filter.contains(b"anything").unwrap());
        assert!(!filter.contains(b"").unwrap());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        filter.insert(b"repeated").unwrap();
        let bits_after_first = filter.bits_set();

        filter.insert(b"repeated").unwrap();

        assert_eq!(
            filter.bits_set(),
            bits_after_first,
            "Re-inserting an element must not change the bit array"
        );
        assert!(filter.contains(b"repeated").unwrap());
    }

    #[test]
    fn test_case_sensitive() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        filter.insert("Starship".as_bytes()).unwrap();

        assert!(filter.contains("Starship".as_bytes()).unwrap());
        assert!(
            !filter.contains("starship".as_bytes()).unwrap(),
            "Hashing raw bytes makes membership case-sensitive"
        );
    }

    #[test]
    fn test_empty_element_round_trips() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        filter.insert(b"").unwrap();

        assert!(filter.contains(b"").unwrap());
    }

    #[test]
    fn test_no_false_negatives_bulk() {
        let config = FilterConfigBuilder::new()
            .capacity_bits(100_000)
            .hash_count(7)
            .build()
            .unwrap();
        let mut filter = BloomFilter::new(config).unwrap();
        let elements: Vec<String> = (0..1000).map(|i| format!("address_{:04x}", i)).collect();

        for elem in &elements {
            filter.insert(elem.as_bytes()).unwrap();
        }

        for elem in &elements {
            assert!(
                filter.contains(elem.as_bytes()).unwrap(),
                "False negative for {}",
                elem
            );
        }
    }

    #[test]
    fn test_rejects_oversized_element() {
        let config = FilterConfigBuilder::new()
            .capacity_bits(10_000)
            .max_element_bytes(16)
            .build()
            .unwrap();
        let mut filter = BloomFilter::new(config).unwrap();
        let oversized = [0u8; 17];

        assert!(matches!(
            filter.insert(&oversized),
            Err(FilterError::ElementTooLarge { len: 17, max: 16 })
        ));
        assert!(matches!(
            filter.contains(&oversized),
            Err(FilterError::ElementTooLarge { .. })
        ));
        assert_eq!(
            filter.bits_set(),
            0,
            "Rejected insert must not touch the bit array"
        );
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = FilterConfig {
            hash_count: 0,
            ..Default::default()
        };

        assert!(matches!(
            BloomFilter::new(config),
            Err(FilterError::InvalidHashCount { .. })
        ));
    }

    #[test]
    fn test_false_positive_rate_estimate_grows() {
        let mut filter = BloomFilter::new(small_config()).unwrap();

        assert_eq!(filter.false_positive_rate(), 0.0);

        for i in 0..100 {
            filter.insert(format!("elem_{}", i).as_bytes()).unwrap();
        }

        assert!(filter.false_positive_rate() > 0.0);
        assert!(filter.load_factor() > 0.0);
    }

    #[test]
    fn test_custom_hasher_is_used() {
        /// Degenerate strategy hashing everything to the same pair
        struct ConstantHasher;

        impl IndexHasher for ConstantHasher {
            fn hash128(&self, _element: &[u8], _seed: u32) -> (u64, u64) {
                (3, 5)
            }
        }

        let mut filter = BloomFilter::with_hasher(small_config(), ConstantHasher).unwrap();
        filter.insert(b"anything").unwrap();

        // Every element collides under the constant hasher
        assert!(filter.contains(b"something else entirely").unwrap());
        assert_eq!(
            filter.bits_set(),
            7,
            "Indices 3, 8, 13, ... are distinct for k=7"
        );
    }

    #[test]
    fn test_membership_filter_trait_object() {
        let mut filter = BloomFilter::new(small_config()).unwrap();
        let dyn_filter: &mut dyn MembershipFilter = &mut filter;

        dyn_filter.insert(b"via_trait").unwrap();
        assert!(dyn_filter.contains(b"via_trait").unwrap());
    }
}
