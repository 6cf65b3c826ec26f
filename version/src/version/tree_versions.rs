use versioned_feature_core::FeatureVersion;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeMethodVersions {
    pub build: FeatureVersion,
    pub build_parallel: FeatureVersion,
    /// How an unpaired node at an odd-width level is combined.
    /// 0: hashed together with a copy of itself.
    pub odd_node_policy: FeatureVersion,
}
