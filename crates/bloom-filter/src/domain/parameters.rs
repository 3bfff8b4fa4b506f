//! False-positive rate estimation
//!
//! Formula: FPR = (1 - e^(-kn/m))^k
//!
//! Deriving optimal (m, k) from a desired element count and target FPR is
//! deliberately not implemented; capacity and hash count are fixed,
//! caller-supplied construction parameters.

/// Calculate the expected false positive rate for given parameters
///
/// # Arguments
/// * `m` - Filter size in bits
/// * `n` - Number of elements inserted
/// * `k` - Number of hash functions
pub fn calculate_fpr(m: u64, n: u64, k: u32) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fpr_calculation() {
        // With m=1000, n=100, k=7, FPR should be around 0.008
        let fpr = calculate_fpr(1000, 100, 7);
        assert!(fpr > 0.005 && fpr < 0.02, "Expected FPR≈0.008, got {}", fpr);
    }

    #[test]
    fn test_fpr_empty_filter_is_zero() {
        let fpr = calculate_fpr(1000, 0, 7);
        assert_eq!(fpr, 0.0, "No insertions means no false positives");
    }

    #[test]
    fn test_fpr_zero_bits_is_one() {
        assert_eq!(calculate_fpr(0, 10, 7), 1.0);
    }

    #[test]
    fn test_fpr_reference_configuration() {
        // Reference configuration: m=209,715,200 bits, k=8, n=10M → FPR≈1e-4
        let fpr = calculate_fpr(209_715_200, 10_000_000, 8);
        assert!(
            fpr > 0.5e-4 && fpr < 2.0e-4,
            "Expected FPR≈1e-4, got {}",
            fpr
        );
    }

    #[test]
    fn test_more_elements_raise_fpr() {
        let low = calculate_fpr(10_000, 100, 8);
        let high = calculate_fpr(10_000, 1_000, 8);
        assert!(high > low, "FPR should grow with the element count");
    }
}
