//! Fixed-size bit store
//!
//! Allocated and zeroed once at construction, never resized. Bits are only
//! ever set, never cleared, so the array state is monotonically
//! non-decreasing.

use bitvec::prelude::*;

use crate::error::FilterError;

/// Fixed-length bit array addressed by index.
#[derive(Clone, Debug)]
pub struct BitArray {
    bits: BitVec<u8, Lsb0>,
}

impl BitArray {
    /// Allocate a zeroed bit array of exactly `len_bits` bits.
    ///
    /// Allocation failure is surfaced as `FilterError::AllocationFailed`
    /// rather than aborting the process.
    pub fn new(len_bits: u64) -> Result<Self, FilterError> {
        if len_bits == 0 {
            return Err(FilterError::ZeroCapacity);
        }
        let len = usize::try_from(len_bits).map_err(|_| FilterError::CapacityTooLarge {
            bits: len_bits,
            max: usize::MAX as u64,
        })?;
        let bytes = len.div_ceil(8);

        let mut raw: Vec<u8> = Vec::new();
        raw.try_reserve_exact(bytes)
            .map_err(|_| FilterError::AllocationFailed { bytes })?;
        raw.resize(bytes, 0);

        let mut bits = BitVec::<u8, Lsb0>::from_vec(raw);
        bits.truncate(len);
        Ok(Self { bits })
    }

    /// Set the bit at `index`, returning whether it was newly set.
    ///
    /// Idempotent: setting an already-set bit has no effect. Panics if
    /// `index >= len_bits` — out-of-range indices are a precondition
    /// violation, unreachable when indices come from the hash expander's
    /// modulo step.
    pub fn set(&mut self, index: u64) -> bool {
        !self.bits.replace(index as usize, true)
    }

    /// Test whether the bit at `index` is set. Read-only.
    ///
    /// Panics if `index >= len_bits`.
    pub fn test(&self, index: u64) -> bool {
        self.bits[index as usize]
    }

    /// Number of bits in the array.
    pub fn len_bits(&self) -> u64 {
        self.bits.len() as u64
    }
}
