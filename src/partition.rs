//! Chunk partitioning for parallel dispatch.
//!
//! Splits a buffer of `total_len` bytes into exactly `worker_count`
//! contiguous, non-overlapping descriptors covering `[0, total_len)` in
//! ascending order. The split is an even division; the last chunk absorbs
//! the remainder and may exceed the base size by up to `worker_count - 1`
//! bytes. When `total_len < worker_count`, leading chunks are empty.
//!
//! The partition never changes which keystream byte a buffer position maps
//! to (workers index the keystream by absolute offset), so the same split
//! formula serves encryption and decryption at any worker count.

use crate::error::FibraCryptError;
use std::ops::Range;

/// A contiguous slice of the input buffer assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Absolute offset of the first byte of the chunk.
    pub start: usize,
    /// Number of bytes in the chunk. Zero is legal.
    pub len: usize,
}

impl Chunk {
    /// Absolute offset one past the last byte of the chunk.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The chunk as an index range into the buffer.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Whether the chunk holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Splits `total_len` bytes into `worker_count` chunk descriptors.
///
/// # Parameters
/// - `total_len`: Length of the buffer being partitioned.
/// - `worker_count`: Number of chunks to produce (minimum 1).
///
/// # Returns
/// Exactly `worker_count` descriptors tiling `[0, total_len)` in ascending
/// start order, remainder in the last chunk.
///
/// # Errors
/// Returns [`FibraCryptError::InvalidWorkerCount`] if `worker_count == 0`.
///
/// # Examples
///
/// ```
/// use fibracrypt::partition;
///
/// let chunks = partition::split(5, 2).unwrap();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!((chunks[0].start, chunks[0].len), (0, 2));
/// assert_eq!((chunks[1].start, chunks[1].len), (2, 3));
/// ```
pub fn split(total_len: usize, worker_count: usize) -> Result<Vec<Chunk>, FibraCryptError> {
    if worker_count == 0 {
        return Err(FibraCryptError::InvalidWorkerCount);
    }
    let base = total_len / worker_count;
    let mut chunks = Vec::with_capacity(worker_count);
    for i in 0..worker_count - 1 {
        chunks.push(Chunk {
            start: i * base,
            len: base,
        });
    }
    let tail_start = (worker_count - 1) * base;
    chunks.push(Chunk {
        start: tail_start,
        len: total_len - tail_start,
    });
    Ok(chunks)
}
