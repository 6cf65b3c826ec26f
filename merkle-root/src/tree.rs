use merkle_root_costs::{
    CostResult, CostsExt, OperationCost, cost_return_on_error, cost_return_on_error_no_add,
};
use merkle_root_version::{check_v0_with_cost, version::MerkleRootVersion};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    hash::Digest,
    node::Node,
};

/// A binary Merkle tree built over an ordered sequence of blocks.
///
/// Built bottom-up in one pass and read-only afterwards. An empty input
/// produces a tree without a root, which is not the same thing as a tree
/// holding one leaf.
///
/// ```text
///                 root = I(I(a, b), I(c, c))
///                /                          \
///       I(a, b)                              I(c, c)
///      /       \                            /       \
///  L(a)         L(b)                    L(c)         L(c)   <- duplicated
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    root: Option<Node>,
    leaf_count: usize,
    height: usize,
}

impl MerkleTree {
    /// Build a tree with the latest method versions.
    ///
    /// Cost reports one `hash_byte_calls` per block and one
    /// `hash_node_calls` per internal node.
    pub fn build<B: AsRef<[u8]>>(blocks: &[B]) -> CostResult<Self, Error> {
        Self::build_with_version(blocks, MerkleRootVersion::latest())
    }

    /// Build a tree dispatching on the given method versions.
    pub fn build_with_version<B: AsRef<[u8]>>(
        blocks: &[B],
        version: &MerkleRootVersion,
    ) -> CostResult<Self, Error> {
        check_v0_with_cost!("build", version.tree_versions.build);
        check_v0_with_cost!("odd_node_policy", version.tree_versions.odd_node_policy);

        let mut cost = OperationCost::default();
        debug!(leaf_count = blocks.len(), "building merkle tree");

        if blocks.is_empty() {
            return Ok(Self::empty()).wrap_with_cost(cost);
        }

        let mut level = cost_return_on_error_no_add!(&cost, reserve_level(blocks.len()));
        level.extend(blocks.iter().map(|block| Node::leaf(block.as_ref())));
        cost += OperationCost::with_hash_byte_calls(blocks.len() as u64);

        let mut height = 0;
        while level.len() > 1 {
            let width = level.len();
            level = cost_return_on_error!(&mut cost, reduce_level(level));
            height += 1;
            trace!(height, width, next_width = level.len(), "reduced level");
        }

        let tree = Self {
            root: level.pop(),
            leaf_count: blocks.len(),
            height,
        };
        debug!(
            leaf_count = tree.leaf_count,
            height = tree.height,
            hash_node_calls = cost.hash_node_calls,
            "built merkle tree"
        );
        Ok(tree).wrap_with_cost(cost)
    }

    /// A tree over no blocks.
    pub fn empty() -> Self {
        Self {
            root: None,
            leaf_count: 0,
            height: 0,
        }
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn from_parts(root: Option<Node>, leaf_count: usize, height: usize) -> Self {
        Self {
            root,
            leaf_count,
            height,
        }
    }

    /// The root node, `None` iff the tree was built from no blocks.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Consume the tree, returning its root node.
    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// The commitment to the input sequence, `None` iff the tree is empty.
    pub fn root_digest(&self) -> Option<Digest> {
        self.root.as_ref().map(|root| *root.digest())
    }

    /// `true` if built from no blocks.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of blocks the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of reduction passes from the leaves to the root. A single-leaf
    /// tree (and the empty tree) has height 0.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Allocate an empty level buffer able to hold `width` nodes.
///
/// Fails with [`Error::AllocationFailed`] instead of aborting, so an
/// oversized input is reported rather than truncated.
pub(crate) fn reserve_level(width: usize) -> Result<Vec<Node>> {
    let mut level = Vec::new();
    level
        .try_reserve_exact(width)
        .map_err(|source| Error::AllocationFailed {
            requested: width,
            source,
        })?;
    Ok(level)
}

/// Combine every consecutive pair `(2i, 2i + 1)` into one parent. The result
/// has `ceil(width / 2)` nodes and is a fresh buffer; its cost is one
/// `hash_node_calls` per parent.
fn reduce_level(level: Vec<Node>) -> CostResult<Vec<Node>, Error> {
    let cost = OperationCost::default();
    let mut next = cost_return_on_error_no_add!(&cost, reserve_level(level.len().div_ceil(2)));
    let mut nodes = level.into_iter();
    while let Some(left) = nodes.next() {
        next.push(combine(left, nodes.next()));
    }
    let cost = OperationCost::with_hash_node_calls(next.len() as u64);
    Ok(next).wrap_with_cost(cost)
}

/// Hash a pair of siblings, or the trailing node of an odd-width level.
pub(crate) fn combine(left: Node, right: Option<Node>) -> Node {
    match right {
        Some(right) => Node::internal(left, Some(right)),
        None => pair_odd_node_with_itself(left),
    }
}

/// The unpaired last node of an odd-width level is hashed with a copy of
/// itself: `I(x, x)`. This happens at every odd level, not only the leaves.
///
/// Pinned as `odd_node_policy` version 0. One consequence is that
/// `[a, b, c]` and `[a, b, c, c]` share a root; inclusion proofs built on top
/// of this tree must account for it. Do not change this without a new
/// version.
pub(crate) fn pair_odd_node_with_itself(node: Node) -> Node {
    Node::internal(node, None)
}
