//! Location of poster artwork inside the Plex metadata bundle store.

use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

/// Movie bundles, relative to the Plex installation root.
pub const METADATA_MOVIES_PATH: &str = "Library/Application Support/Plex Media Server/Metadata/Movies";

/// Length of the `metadata://` scheme prefix on stored jacket references.
pub const JACKET_PREFIX_LEN: usize = 11;

/// Lowercase hex SHA-1 of the agent GUID (40 chars).
pub fn guid_digest(guid: &str) -> String {
    format!("{:x}", Sha1::digest(guid.as_bytes()))
}

/// Sharded path of the stored jacket, relative to the movie metadata root.
///
/// `{d[0]}/{d[1..]}.bundle/Contents/_stored/{jacket minus prefix}`
pub fn relative_jacket_path(guid: &str, jacket: &str) -> String {
    let digest = guid_digest(guid);
    let (shard, rest) = digest.split_at(1);
    let stored: String = jacket.chars().skip(JACKET_PREFIX_LEN).collect();
    format!("{shard}/{rest}.bundle/Contents/_stored/{stored}")
}

/// Absolute jacket path under an installation root.
pub fn metadata_jacket_path(metadata_home: &Path, relative: &str) -> PathBuf {
    metadata_home.join(METADATA_MOVIES_PATH).join(relative)
}

#[cfg(test)]
#[path = "tests/jacket_tests.rs"]
mod tests;
