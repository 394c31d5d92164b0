use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::PathKind;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(PathKind),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    probes: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_kind(&self, path: impl Into<PathBuf>, kind: PathKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(path.into(), Response::Ok(kind));
    }

    pub fn set_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(path.into(), Response::Err(message.into()));
    }

    /// Paths probed so far, in order.
    pub fn probes(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.probes.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn path_kind(&self, path: &Path) -> Result<PathKind> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.probes.push(path.to_path_buf());

        match inner.responses.get(path) {
            Some(Response::Ok(kind)) => Ok(*kind),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", path.display())),
        }
    }
}
