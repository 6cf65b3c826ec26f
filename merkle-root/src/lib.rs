//! Binary Merkle root over an ordered sequence of blocks.
//!
//! Each block becomes a leaf, then each level is reduced pairwise until one
//! node remains. Its digest commits to the content, order and count of the
//! blocks. Hashing is SHA-256 with one-byte domain tags:
//!
//! ```text
//! leaf(d)        = sha256(0x00 || d)
//! internal(l, r) = sha256(0x01 || l || r)
//! ```
//!
//! When a level has an odd number of nodes, the last one is hashed together
//! with a copy of itself. This applies at every level.
//!
//! # Core types
//!
//! - [`MerkleTree`] — built with [`MerkleTree::build`]; exposes the root
//!   digest, or `None` for an empty input.
//! - [`Node`] — leaf or internal node owning both of its children.
//!
//! # Features
//!
//! - `parallel` — [`MerkleTree::build_parallel`] reduces each level on the
//!   rayon thread pool. Output is identical to the sequential build.

#![warn(missing_docs)]

mod error;
pub mod hash;
mod node;
#[cfg(feature = "parallel")]
mod parallel;
mod tree;


pub use error::{Error, Result};
pub use hash::{DIGEST_LEN, Digest, INTERNAL_TAG, LEAF_TAG, hash_internal, hash_leaf};
pub use merkle_root_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use merkle_root_version::{error::MerkleRootVersionError, version::MerkleRootVersion};
pub use node::Node;
pub use tree::MerkleTree;
