//! FibraCrypt parallel byte obfuscation engine.
//!
//! FibraCrypt transforms an arbitrary byte buffer into an obfuscated buffer
//! of identical length, and reverses the transform exactly. The keystream is
//! the Fibonacci sequence reduced mod 256, sized to the buffer length; each
//! byte is XORed with its keystream value and bitwise-complemented. The
//! transform runs in parallel over contiguous chunks of the buffer and is
//! reassembled in chunk order, so the worker count never affects the output.
//!
//! This is a reversible obfuscation, not a cryptographically strong cipher:
//! the keystream depends only on the buffer length.
//!
//! # Architecture
//!
//! ```text
//! keystream   (mod-256 Fibonacci sequence, derived from buffer length)
//!     ↓ shared read-only
//! partition   (even split, remainder in the last chunk — one chunk per worker)
//!     ↓ disjoint slices
//! dispatch    (scoped threads, fan-out/fan-in, reassembly in chunk order)
//!     ↓
//! FibraCrypt  (orchestrator — encrypt/decrypt over the same pipeline)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a buffer:
//!
//! ```
//! use fibracrypt::FibraCrypt;
//!
//! let engine = FibraCrypt::new();
//!
//! let original = b"The quick brown fox jumps over the lazy dog".to_vec();
//! let encrypted = engine.encrypt(&original).unwrap();
//! assert_ne!(encrypted, original);
//! assert_eq!(encrypted.len(), original.len());
//!
//! let decrypted = engine.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, original);
//! ```
//!
//! Use a custom worker count (the ciphertext is identical for any count):
//!
//! ```
//! use fibracrypt::FibraCrypt;
//!
//! let two = FibraCrypt::with_worker_count(2).unwrap();
//! let eight = FibraCrypt::with_worker_count(8).unwrap();
//!
//! let data = vec![0x42u8; 1024];
//! assert_eq!(two.encrypt(&data).unwrap(), eight.encrypt(&data).unwrap());
//! ```

#![deny(clippy::all)]

pub mod dispatch;
pub mod error;
pub mod keystream;
pub mod partition;
pub mod transform;

mod fibracrypt;

pub use error::FibraCryptError;
pub use fibracrypt::FibraCrypt;
pub use transform::Mode;
