//! Shared constants for test infrastructure

// Tags
pub const TAG_V0_1_19: &str = "v0.1.19";
pub const TAG_V0_1_20: &str = "v0.1.20";
pub const TAG_V0_2_10: &str = "v0.2.10";
pub const TAG_V1_1_21: &str = "v1.1.21";
pub const TAG_V100_0_0: &str = "v100.0.0";
pub const MALFORMED_TAG: &str = "vvvvvvvv";

// API paths
pub const OWNER: &str = "acme";
pub const REPO: &str = "widget";
pub const LATEST_RELEASE_PATH: &str = "/repos/acme/widget/releases/latest";
pub const MANIFEST_ASSET_PATH: &str = "/acme/widget/releases/download/v1.1.21/manifest.yaml";

// Bodies
pub const MANIFEST_CONTENT: &[u8] = b"kind: Manifest\nversion: v1.1.21\n";
pub const NOT_JSON: &[u8] = b"string";
