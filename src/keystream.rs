//! Fibonacci-derived keystream generation.
//!
//! The keystream is a pure function of the requested length: the additive
//! recurrence seeded with `0, 1`, reduced modulo 256 at every step. Because
//! `(a + b) mod 256` computed from already-reduced residues equals the true
//! Fibonacci value mod 256, only two `u8` residues are ever carried forward;
//! the unreduced terms, which grow without bound, are never materialized.

/// Generates the keystream for a buffer of `length` bytes.
///
/// # Parameters
/// - `length`: Number of keystream bytes to produce.
///
/// # Returns
/// A vector of exactly `length` bytes: `[]` for 0, `[0]` for 1, otherwise
/// the mod-256 Fibonacci sequence starting `0, 1, 1, 2, 3, ...`.
///
/// # Examples
///
/// ```
/// use fibracrypt::keystream;
///
/// assert_eq!(keystream::generate(5), vec![0, 1, 1, 2, 3]);
/// ```
pub fn generate(length: usize) -> Vec<u8> {
    match length {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut seq = Vec::with_capacity(length);
            seq.push(0u8);
            seq.push(1u8);
            for i in 2..length {
                let next = seq[i - 1].wrapping_add(seq[i - 2]);
                seq.push(next);
            }
            seq
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate(0), Vec::<u8>::new());
    }

    #[test]
    fn test_generate_single() {
        assert_eq!(generate(1), vec![0]);
    }

    #[test]
    fn test_generate_pair() {
        assert_eq!(generate(2), vec![0, 1]);
    }

    #[test]
    fn test_generate_five() {
        assert_eq!(generate(5), vec![0, 1, 1, 2, 3]);
    }

    /// Frozen first 21 terms, covering the first wrap past 255
    /// (fib(14) = 377 -> 121).
    #[test]
    fn test_generate_frozen_prefix() {
        let expected: [u8; 21] = [
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 121, 98, 219,
            61, 24, 85, 109,
        ];
        assert_eq!(generate(21), expected);
    }

    /// Reduced residues must satisfy the recurrence mod 256 at every index.
    #[test]
    fn test_recurrence_holds_mod_256() {
        let seq = generate(4096);
        for i in 2..seq.len() {
            assert_eq!(
                seq[i],
                seq[i - 1].wrapping_add(seq[i - 2]),
                "recurrence broken at index {}",
                i
            );
        }
    }

    /// A longer keystream is an extension of a shorter one, so the byte at
    /// a given absolute position never depends on the total length checked.
    #[test]
    fn test_prefix_stability() {
        let long = generate(1000);
        for len in [0, 1, 2, 3, 10, 999] {
            assert_eq!(generate(len), long[..len], "prefix mismatch at len={}", len);
        }
    }

    #[test]
    fn test_exact_length() {
        for len in [0, 1, 2, 7, 256, 1031] {
            assert_eq!(generate(len).len(), len);
        }
    }
}
