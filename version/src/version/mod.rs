pub mod tree_versions;
pub mod v1;

pub use versioned_feature_core::*;

use crate::version::{tree_versions::TreeMethodVersions, v1::MERKLE_ROOT_V1};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleRootVersion {
    pub protocol_version: u32,
    pub tree_versions: TreeMethodVersions,
}

impl MerkleRootVersion {
    pub fn latest<'a>() -> &'a Self {
        MERKLE_ROOT_VERSIONS.last().unwrap_or(&MERKLE_ROOT_V1)
    }
}

pub const MERKLE_ROOT_VERSIONS: &[MerkleRootVersion] = &[MERKLE_ROOT_V1];
