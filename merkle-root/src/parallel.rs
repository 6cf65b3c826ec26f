//! Multi-threaded tree construction (requires the `parallel` feature).
//!
//! Pairs within one level have no data dependency on each other, so each
//! level is reduced with rayon. Levels still run one after another: every
//! parent needs both of its children from the previous level.

use merkle_root_costs::{
    CostResult, CostsExt, OperationCost, cost_return_on_error, cost_return_on_error_no_add,
};
use merkle_root_version::{check_v0_with_cost, version::MerkleRootVersion};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    error::Error,
    node::Node,
    tree::{MerkleTree, combine, reserve_level},
};

impl MerkleTree {
    /// Build a tree on the rayon thread pool with the latest method versions.
    ///
    /// Produces exactly the same tree and cost as [`MerkleTree::build`].
    pub fn build_parallel<B: AsRef<[u8]> + Sync>(blocks: &[B]) -> CostResult<Self, Error> {
        Self::build_parallel_with_version(blocks, MerkleRootVersion::latest())
    }

    /// Parallel counterpart of [`MerkleTree::build_with_version`].
    pub fn build_parallel_with_version<B: AsRef<[u8]> + Sync>(
        blocks: &[B],
        version: &MerkleRootVersion,
    ) -> CostResult<Self, Error> {
        check_v0_with_cost!("build_parallel", version.tree_versions.build_parallel);
        check_v0_with_cost!("odd_node_policy", version.tree_versions.odd_node_policy);

        let mut cost = OperationCost::default();
        debug!(leaf_count = blocks.len(), "building merkle tree in parallel");

        if blocks.is_empty() {
            return Ok(Self::empty()).wrap_with_cost(cost);
        }

        let mut level = cost_return_on_error_no_add!(&cost, reserve_level(blocks.len()));
        blocks
            .par_iter()
            .map(|block| Node::leaf(block.as_ref()))
            .collect_into_vec(&mut level);
        cost += OperationCost::with_hash_byte_calls(blocks.len() as u64);

        let mut height = 0;
        while level.len() > 1 {
            let width = level.len();
            level = cost_return_on_error!(&mut cost, reduce_level_parallel(level));
            height += 1;
            trace!(height, width, next_width = level.len(), "reduced level");
        }

        let tree = Self::from_parts(level.pop(), blocks.len(), height);
        debug!(
            leaf_count = tree.leaf_count(),
            height = tree.height(),
            hash_node_calls = cost.hash_node_calls,
            "built merkle tree in parallel"
        );
        Ok(tree).wrap_with_cost(cost)
    }
}

/// Parallel version of the sequential level reduction.
///
/// `chunks(2)` is indexed, so chunk `i` is always nodes `2i` and `2i + 1`
/// regardless of scheduling. Only the final chunk of an odd-width level has a
/// single node, and that one goes through the odd-node policy.
fn reduce_level_parallel(level: Vec<Node>) -> CostResult<Vec<Node>, Error> {
    let cost = OperationCost::default();
    let mut next = cost_return_on_error_no_add!(&cost, reserve_level(level.len().div_ceil(2)));
    next.par_extend(level.into_par_iter().chunks(2).filter_map(|chunk| {
        let mut chunk = chunk.into_iter();
        let left = chunk.next()?;
        Some(combine(left, chunk.next()))
    }));
    let cost = OperationCost::with_hash_node_calls(next.len() as u64);
    Ok(next).wrap_with_cost(cost)
}
