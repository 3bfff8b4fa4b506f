//! Capability trait for membership filters
//!
//! The `{insert, contains}` surface every filter variant shares. A counting
//! or cuckoo variant would implement this same trait without any shared
//! mutable base state; only the Bloom variant exists today.

use crate::error::FilterError;

/// Probabilistic set-membership filter: insert elements, then ask whether an
/// element might have been inserted.
///
/// Implementations must never report a false negative: after
/// `insert(x)` succeeds, `contains(x)` returns `Ok(true)` for as long as the
/// filter lives. False positives are permitted.
pub trait MembershipFilter {
    /// Record an element's membership. Idempotent.
    fn insert(&mut self, element: &[u8]) -> Result<(), FilterError>;

    /// Test whether an element might have been inserted.
    ///
    /// `Ok(false)` is definitive; `Ok(true)` may be a false positive.
    fn contains(&self, element: &[u8]) -> Result<bool, FilterError>;
}
