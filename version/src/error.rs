use thiserror::Error;
use versioned_feature_core::FeatureVersion;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleRootVersionError {
    /// The requested method version is not one this build understands
    #[error("merkle root unknown version on {method}, received: {received}")]
    UnknownVersionMismatch {
        /// method
        method: String,
        /// the versions of this method that are implemented
        known_versions: Vec<FeatureVersion>,
        /// requested version
        received: FeatureVersion,
    },
}
