use merkle_root::{Digest, MerkleTree, hash_internal, hash_leaf};
use proptest::prelude::*;

/// Straightforward recursive definition of the root, used as an oracle: split
/// the leaf digests into pairs, duplicate a trailing odd one, repeat.
fn reference_root(blocks: &[Vec<u8>]) -> Option<Digest> {
    let mut level: Vec<Digest> = blocks.iter().map(|b| hash_leaf(b)).collect();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_internal(left, right),
                [odd] => hash_internal(odd, odd),
                _ => unreachable!("chunks(2) yields one or two items"),
            })
            .collect();
    }
    level.pop()
}

fn build_root(blocks: &[Vec<u8>]) -> Option<Digest> {
    MerkleTree::build(blocks)
        .unwrap()
        .expect("build should not fail")
        .root_digest()
}

fn blocks_strategy(max_blocks: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..48), 0..max_blocks)
}

proptest! {
    #[test]
    fn test_root_matches_reference(blocks in blocks_strategy(70)) {
        prop_assert_eq!(build_root(&blocks), reference_root(&blocks));
    }

    #[test]
    fn test_root_absent_iff_empty(blocks in blocks_strategy(20)) {
        let tree = MerkleTree::build(&blocks).unwrap().expect("build");
        prop_assert_eq!(tree.root_digest().is_none(), blocks.is_empty());
        prop_assert_eq!(tree.leaf_count(), blocks.len());
    }

    #[test]
    fn test_build_is_deterministic(blocks in blocks_strategy(40)) {
        let copy = blocks.clone();
        prop_assert_eq!(build_root(&blocks), build_root(&copy));
    }

    #[test]
    fn test_changing_one_block_changes_root(
        blocks in blocks_strategy(40).prop_filter("non-empty", |b| !b.is_empty()),
        index in any::<prop::sample::Index>(),
        extra in any::<u8>(),
    ) {
        let i = index.index(blocks.len());
        let mut changed = blocks.clone();
        changed[i].push(extra);
        prop_assert_ne!(build_root(&blocks), build_root(&changed));
    }

    #[test]
    fn test_swapping_distinct_blocks_changes_root(
        blocks in blocks_strategy(40).prop_filter("at least two", |b| b.len() >= 2),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (i, j) = (a.index(blocks.len()), b.index(blocks.len()));
        prop_assume!(blocks[i] != blocks[j]);
        let mut swapped = blocks.clone();
        swapped.swap(i, j);
        prop_assert_ne!(build_root(&blocks), build_root(&swapped));
    }
}
