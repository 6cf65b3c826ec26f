use crate::version::{MerkleRootVersion, tree_versions::TreeMethodVersions};

pub const MERKLE_ROOT_V1: MerkleRootVersion = MerkleRootVersion {
    protocol_version: 0,
    tree_versions: TreeMethodVersions {
        build: 0,
        build_parallel: 0,
        odd_node_policy: 0,
    },
};
