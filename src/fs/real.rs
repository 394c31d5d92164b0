use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::PathKind;

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn path_kind(&self, path: &Path) -> Result<PathKind> {
        // metadata() follows symlinks: a link to a directory is a valid root.
        let metadata = tokio::fs::metadata(path).await?;
        let file_type = metadata.file_type();

        let kind = if file_type.is_dir() {
            PathKind::Directory
        } else if file_type.is_file() {
            PathKind::File
        } else {
            PathKind::Other
        };

        Ok(kind)
    }
}
