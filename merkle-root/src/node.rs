//! Tree nodes.
//!
//! A node is either a leaf carrying the digest of one input block, or an
//! internal node that owns exactly two children. There is no way to store an
//! internal node with a single child: [`Node::internal`] fills a missing
//! right child with a copy of the left one before hashing.

use crate::hash::{Digest, hash_internal, hash_leaf};

/// A node of a binary Merkle tree.
///
/// Nodes are immutable once built. A parent takes its children by value, so
/// it owns them exclusively and cannot observe or alter a digest that is
/// still held elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Digest of a single input block: `sha256(0x00 || data)`.
    Leaf {
        /// The leaf digest.
        digest: Digest,
    },
    /// Digest of two children: `sha256(0x01 || left || right)`.
    Internal {
        /// The internal digest.
        digest: Digest,
        /// Left child.
        left: Box<Node>,
        /// Right child.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf from raw block data.
    ///
    /// Only the digest is kept; the node holds no reference to `data`.
    pub fn leaf(data: &[u8]) -> Self {
        Node::Leaf {
            digest: hash_leaf(data),
        }
    }

    /// Create an internal node from its children.
    ///
    /// When `right` is `None` the left child is duplicated into the right
    /// position, so the result is identical to `internal(x, Some(x))`.
    pub fn internal(left: Node, right: Option<Node>) -> Self {
        let right = match right {
            Some(right) => right,
            None => left.clone(),
        };
        Node::Internal {
            digest: hash_internal(left.digest(), right.digest()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node's digest.
    pub fn digest(&self) -> &Digest {
        match self {
            Node::Leaf { digest } | Node::Internal { digest, .. } => digest,
        }
    }

    /// Left child, `None` for a leaf.
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } => Some(left.as_ref()),
        }
    }

    /// Right child, `None` for a leaf.
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { right, .. } => Some(right.as_ref()),
        }
    }

    /// `true` for a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}
