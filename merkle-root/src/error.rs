use std::collections::TryReserveError;

use merkle_root_version::error::MerkleRootVersionError;
use thiserror::Error;

/// Errors from Merkle tree construction.
///
/// Block contents are never validated: any sequence of byte strings,
/// including an empty one, builds successfully unless memory runs out.
#[derive(Debug, Error)]
pub enum Error {
    /// A level buffer could not be reserved.
    #[error("allocation failed reserving {requested} nodes: {source}")]
    AllocationFailed {
        /// Number of nodes the buffer was sized for.
        requested: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },
    /// A method version requested by the caller is not implemented.
    #[error(transparent)]
    VersionError(#[from] MerkleRootVersionError),
}

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
