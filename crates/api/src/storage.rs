//! Local filesystem object store for uploaded nameplate images.
//!
//! Objects are written under the configured storage root and served back by
//! the static file route mounted at the public base URL. Object names are
//! produced by `nameplate_core::naming::nameplate_object_name`, so they are
//! already filesystem-safe.

use std::path::PathBuf;

use crate::config::StorageConfig;

/// Writes uploaded objects to the local filesystem and maps them to public URLs.
#[derive(Debug)]
pub struct ObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl ObjectStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.root.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Directory objects are written to.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Write an object, creating the storage root if needed.
    ///
    /// Returns the public URL the object is served under.
    pub async fn save(&self, object_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(object_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(self.public_url(object_name))
    }

    /// Public URL for an object name.
    pub fn public_url(&self, object_name: &str) -> String {
        format!("{}/{object_name}", self.public_base_url)
    }
}
