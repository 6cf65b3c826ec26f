//! Domain-separated SHA-256 hashing for tree nodes.
//!
//! - Leaf nodes:     `sha256(0x00 || data)`
//! - Internal nodes: `sha256(0x01 || left_digest || right_digest)`
//!
//! The tag byte keeps leaf preimages and internal-node preimages in disjoint
//! namespaces, so a block crafted to look like two concatenated digests can
//! never hash to the same value as an internal node. Inputs are concatenated
//! without length prefixes: internal preimages are always exactly 65 bytes
//! and leaf preimages always start with the other tag.

use sha2::{Digest as _, Sha256};

/// Length in bytes of every node digest.
pub const DIGEST_LEN: usize = 32;

/// A node digest.
pub type Digest = [u8; DIGEST_LEN];

/// Domain tag prepended to leaf hash inputs.
pub const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal node hash inputs.
pub const INTERNAL_TAG: u8 = 0x01;

/// Compute the leaf digest `sha256(0x00 || data)`.
///
/// Zero-length data is valid and yields `sha256(0x00)`.
pub fn hash_leaf(data: &[u8]) -> Digest {
    Sha256::new()
        .chain_update([LEAF_TAG])
        .chain_update(data)
        .finalize()
        .into()
}

/// Compute the internal digest `sha256(0x01 || left || right)`.
pub fn hash_internal(left: &Digest, right: &Digest) -> Digest {
    let mut input = [0u8; 1 + 2 * DIGEST_LEN];
    input[0] = INTERNAL_TAG;
    input[1..1 + DIGEST_LEN].copy_from_slice(left);
    input[1 + DIGEST_LEN..].copy_from_slice(right);
    Sha256::digest(input).into()
}
