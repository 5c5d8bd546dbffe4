//! Parallel fan-out/fan-in over chunk descriptors.
//!
//! Spawns one scoped thread per chunk. Every worker reads only its own
//! disjoint slice of the shared read-only buffer and owns its output vector
//! until the join, so no synchronization is needed during transformation.
//! After the join barrier the results are concatenated in ascending
//! chunk-index order — never in completion order, which the scheduler does
//! not guarantee.
//!
//! Failure policy: all workers are observed before reporting. A panicking
//! worker never silently drops its chunk; once every sibling has been
//! joined, the call fails with the indices of all affected chunks and no
//! partial output is returned.

use crate::error::FibraCryptError;
use crate::partition::Chunk;
use std::thread;

/// Runs `transform` over every chunk in parallel and reassembles the
/// results in chunk order.
///
/// The closure receives a chunk's slice of `buffer` together with the
/// chunk's absolute start offset, and returns the transformed bytes.
///
/// # Parameters
/// - `buffer`: The full input buffer, shared read-only across workers.
/// - `chunks`: Descriptors produced by [`crate::partition::split`].
/// - `transform`: Per-chunk transformation, applied on a worker thread.
///
/// # Returns
/// The concatenation of all transformed chunks in ascending chunk-index
/// order; same length as `buffer` whenever `transform` is length-preserving.
///
/// # Errors
/// Returns [`FibraCryptError::WorkerFailure`] listing every chunk whose
/// worker panicked, after all workers have been joined.
pub fn run<F>(buffer: &[u8], chunks: &[Chunk], transform: F) -> Result<Vec<u8>, FibraCryptError>
where
    F: Fn(&[u8], usize) -> Vec<u8> + Sync,
{
    let transform = &transform;

    // Join inside the scope so a panicked worker is captured here instead
    // of resuming its unwind at scope exit. Handles are joined in spawn
    // order, which is chunk order.
    let results: Vec<thread::Result<Vec<u8>>> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| {
                let slice = &buffer[chunk.range()];
                let start = chunk.start;
                scope.spawn(move || transform(slice, start))
            })
            .collect();
        handles.into_iter().map(|handle| handle.join()).collect()
    });

    let mut failed = Vec::new();
    let mut output = Vec::with_capacity(buffer.len());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(bytes) => output.extend_from_slice(&bytes),
            Err(_) => failed.push(index),
        }
    }
    if !failed.is_empty() {
        return Err(FibraCryptError::WorkerFailure { chunks: failed });
    }
    Ok(output)
}
