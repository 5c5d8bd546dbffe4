//! FibraCrypt: parallel length-preserving obfuscation engine.
//!
//! Orchestrates the full transform: derive the keystream from the buffer
//! length, partition the buffer into one chunk per worker, fan the chunks
//! out to parallel workers, and reassemble in chunk order. Encryption and
//! decryption share the orchestration and differ only in the substitution
//! direction passed to the byte transformer.

use crate::dispatch;
use crate::error::FibraCryptError;
use crate::keystream;
use crate::partition;
use crate::transform::{self, Mode};

/// Default number of parallel workers.
const DEFAULT_WORKER_COUNT: usize = 4;

/// Parallel length-preserving byte obfuscation engine.
///
/// The keystream depends only on the buffer length and is regenerated on
/// every call, so the engine carries no state between invocations and a
/// ciphertext can be decrypted knowing nothing but its own length. The
/// worker count controls how work is distributed, never what the output
/// contains: any two worker counts produce identical bytes.
pub struct FibraCrypt {
    worker_count: usize,
}

impl Default for FibraCrypt {
    fn default() -> Self {
        Self::new()
    }
}

impl FibraCrypt {
    /// Creates a new engine with the default 4 workers.
    ///
    /// # Examples
    ///
    /// ```
    /// use fibracrypt::FibraCrypt;
    ///
    /// let engine = FibraCrypt::new();
    /// let encrypted = engine.encrypt(b"hello").unwrap();
    /// assert_eq!(engine.decrypt(&encrypted).unwrap(), b"hello");
    /// ```
    pub fn new() -> Self {
        FibraCrypt {
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }

    /// Creates a new engine with a custom worker count.
    ///
    /// Counts above the available parallelism are legal; they only reduce
    /// per-worker efficiency, never correctness.
    ///
    /// # Parameters
    /// - `worker_count`: Number of parallel workers (minimum 1).
    ///
    /// # Errors
    /// Returns [`FibraCryptError::InvalidWorkerCount`] if `worker_count`
    /// is zero. The check runs before any worker is spawned.
    ///
    /// # Examples
    ///
    /// ```
    /// use fibracrypt::FibraCrypt;
    ///
    /// let engine = FibraCrypt::with_worker_count(8).unwrap();
    /// assert_eq!(engine.worker_count(), 8);
    /// ```
    ///
    /// ```
    /// use fibracrypt::FibraCrypt;
    ///
    /// assert!(FibraCrypt::with_worker_count(0).is_err());
    /// ```
    pub fn with_worker_count(worker_count: usize) -> Result<Self, FibraCryptError> {
        if worker_count == 0 {
            return Err(FibraCryptError::InvalidWorkerCount);
        }
        Ok(FibraCrypt { worker_count })
    }

    /// Returns the configured worker count.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Encrypts a buffer, returning a new buffer of identical length.
    ///
    /// The input is read only, never mutated.
    ///
    /// # Errors
    /// Returns [`FibraCryptError::WorkerFailure`] if a worker fails; the
    /// call then yields no partial output.
    pub fn encrypt(&self, buffer: &[u8]) -> Result<Vec<u8>, FibraCryptError> {
        self.process(buffer, Mode::Encrypt)
    }

    /// Decrypts a buffer produced by [`encrypt`](Self::encrypt), returning
    /// a new buffer of identical length.
    ///
    /// The worker count need not match the one used for encryption.
    ///
    /// # Errors
    /// Returns [`FibraCryptError::WorkerFailure`] if a worker fails; the
    /// call then yields no partial output.
    pub fn decrypt(&self, buffer: &[u8]) -> Result<Vec<u8>, FibraCryptError> {
        self.process(buffer, Mode::Decrypt)
    }

    /// Shared orchestration for both directions.
    fn process(&self, buffer: &[u8], mode: Mode) -> Result<Vec<u8>, FibraCryptError> {
        // Regenerated per call: keystream identity is a function of the
        // buffer length alone, and nothing survives across invocations.
        let keystream = keystream::generate(buffer.len());
        let chunks = partition::split(buffer.len(), self.worker_count)?;
        dispatch::run(buffer, &chunks, |slice, start| {
            transform::transform_chunk(slice, &keystream, start, mode)
        })
    }
}
