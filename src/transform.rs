//! Per-byte substitution and its inverse.
//!
//! Encryption XORs each byte with its keystream value and then takes the
//! bitwise complement; decryption complements first and XORs second. Both
//! steps are their own inverse, so applying them in reverse order undoes
//! the substitution exactly:
//!
//! ```text
//! Decrypt(Encrypt(b, k), k) = !(!(b ^ k)) ^ k = (b ^ k) ^ k = b
//! ```

/// Direction of the substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// XOR with the keystream value, then complement.
    Encrypt,
    /// Complement, then XOR with the keystream value.
    Decrypt,
}

/// Applies the substitution to a single byte.
///
/// # Parameters
/// - `byte`: The input byte.
/// - `key`: The keystream value at the byte's absolute position.
/// - `mode`: Whether to apply the forward or inverse substitution.
///
/// # Returns
/// The substituted byte.
pub fn transform_byte(byte: u8, key: u8, mode: Mode) -> u8 {
    match mode {
        Mode::Encrypt => !(byte ^ key),
        Mode::Decrypt => (!byte) ^ key,
    }
}

/// Applies the substitution to a chunk of bytes.
///
/// The byte at local index `i` of a chunk starting at absolute offset
/// `start` uses `keystream[(start + i) % keystream.len()]`. The engine
/// always supplies a keystream as long as the whole buffer, making the
/// modulo a no-op; a shorter keystream wraps around instead of failing,
/// and an empty keystream substitutes a key value of 0 so the transform
/// stays total.
///
/// # Parameters
/// - `chunk`: The bytes to transform.
/// - `keystream`: The keystream shared by all chunks of the buffer.
/// - `start`: Absolute offset of `chunk[0]` within the buffer.
/// - `mode`: Whether to apply the forward or inverse substitution.
///
/// # Returns
/// The transformed bytes, same length as `chunk`. Empty chunks produce
/// empty output.
pub fn transform_chunk(chunk: &[u8], keystream: &[u8], start: usize, mode: Mode) -> Vec<u8> {
    if keystream.is_empty() {
        return chunk
            .iter()
            .map(|&byte| transform_byte(byte, 0, mode))
            .collect();
    }
    chunk
        .iter()
        .enumerate()
        .map(|(i, &byte)| {
            let key = keystream[(start + i) % keystream.len()];
            transform_byte(byte, key, mode)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exhaustive involution check over all 65536 (byte, key) pairs.
    #[test]
    fn test_byte_algebra_exhaustive() {
        for byte in 0..=255u8 {
            for key in 0..=255u8 {
                let encrypted = transform_byte(byte, key, Mode::Encrypt);
                let decrypted = transform_byte(encrypted, key, Mode::Decrypt);
                assert_eq!(
                    decrypted, byte,
                    "roundtrip failed for byte={:#04x} key={:#04x}",
                    byte, key
                );
            }
        }
    }

    #[test]
    fn test_encrypt_known_bytes() {
        // !(0x00 ^ 0x00) = 0xFF, !(0xFF ^ 0x01) = 0x01
        assert_eq!(transform_byte(0x00, 0x00, Mode::Encrypt), 0xFF);
        assert_eq!(transform_byte(0xFF, 0x01, Mode::Encrypt), 0x01);
        assert_eq!(transform_byte(0x10, 0x01, Mode::Encrypt), 0xEE);
        assert_eq!(transform_byte(0x42, 0x02, Mode::Encrypt), 0xBF);
        assert_eq!(transform_byte(0x7E, 0x03, Mode::Encrypt), 0x82);
    }

    #[test]
    fn test_transform_chunk_uses_absolute_offset() {
        let keystream = [0u8, 1, 1, 2, 3];
        let full = transform_chunk(&[0x00, 0xFF, 0x10, 0x42, 0x7E], &keystream, 0, Mode::Encrypt);
        let tail = transform_chunk(&[0x10, 0x42, 0x7E], &keystream, 2, Mode::Encrypt);
        assert_eq!(full, vec![0xFF, 0x01, 0xEE, 0xBF, 0x82]);
        assert_eq!(tail, full[2..]);
    }

    #[test]
    fn test_transform_chunk_empty() {
        let keystream = [0u8, 1, 1];
        assert_eq!(transform_chunk(&[], &keystream, 0, Mode::Encrypt), vec![]);
        assert_eq!(transform_chunk(&[], &keystream, 3, Mode::Decrypt), vec![]);
    }

    /// A keystream shorter than the buffer wraps around by position.
    #[test]
    fn test_transform_chunk_short_keystream_wraps() {
        let keystream = [7u8, 9];
        let out = transform_chunk(&[0xAA, 0xBB, 0xCC, 0xDD], &keystream, 0, Mode::Encrypt);
        let expected: Vec<u8> = [0xAAu8, 0xBB, 0xCC, 0xDD]
            .iter()
            .enumerate()
            .map(|(i, &b)| transform_byte(b, keystream[i % 2], Mode::Encrypt))
            .collect();
        assert_eq!(out, expected);
    }

    /// An empty keystream substitutes 0 rather than dividing by zero.
    #[test]
    fn test_transform_chunk_empty_keystream() {
        let out = transform_chunk(&[0x12, 0x34], &[], 0, Mode::Encrypt);
        assert_eq!(out, vec![!0x12u8, !0x34u8]);
        let back = transform_chunk(&out, &[], 0, Mode::Decrypt);
        assert_eq!(back, vec![0x12, 0x34]);
    }

    #[test]
    fn test_chunk_roundtrip_with_offset() {
        let keystream = crate::keystream::generate(64);
        let data: Vec<u8> = (0..32).map(|i| (i * 7 + 3) as u8).collect();
        let encrypted = transform_chunk(&data, &keystream, 17, Mode::Encrypt);
        let decrypted = transform_chunk(&encrypted, &keystream, 17, Mode::Decrypt);
        assert_eq!(decrypted, data);
    }
}
