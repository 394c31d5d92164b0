mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::PathKind;

/// Metadata probe behind option validation. Mockable so tests can stage
/// missing paths, regular files, and probe failures without touching disk.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn path_kind(&self, path: &Path) -> Result<PathKind>;
}
