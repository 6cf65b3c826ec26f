//! Method versioning for Merkle root construction.
//!
//! Every hashing convention that affects the root digest is pinned to a
//! [`FeatureVersion`](version::FeatureVersion). Builders dispatch on these
//! numbers, so a convention can only change by publishing a new
//! [`MerkleRootVersion`](version::MerkleRootVersion), never by editing an
//! existing one.

pub mod error;
pub mod version;

/// Returns early with an `UnknownVersionMismatch` error unless `$version` is
/// 0. The error is converted with `.into()` into the caller's error type.
#[macro_export]
macro_rules! check_v0 {
    ($method:expr, $version:expr) => {{
        const EXPECTED_VERSION: u16 = 0;
        if $version != EXPECTED_VERSION {
            return Err(
                $crate::error::MerkleRootVersionError::UnknownVersionMismatch {
                    method: $method.to_string(),
                    known_versions: vec![EXPECTED_VERSION],
                    received: $version,
                }
                .into(),
            );
        }
    }};
}

/// Same as [`check_v0!`] for functions returning a `CostResult`. Requires
/// `OperationCost` and `CostsExt` in scope at the call site.
#[macro_export]
macro_rules! check_v0_with_cost {
    ($method:expr, $version:expr) => {{
        const EXPECTED_VERSION: u16 = 0;
        if $version != EXPECTED_VERSION {
            return Err(
                $crate::error::MerkleRootVersionError::UnknownVersionMismatch {
                    method: $method.to_string(),
                    known_versions: vec![EXPECTED_VERSION],
                    received: $version,
                }
                .into(),
            )
            .wrap_with_cost(OperationCost::default());
        }
    }};
}
