//! Keeps the word index on disk between runs.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::snapshot;
use crate::tree::Tree;
use crate::words::WordInfo;

/// A snapshot file holding one word index.
#[derive(Clone, Debug)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// A repository stored at `path`. Nothing is touched until
    /// [`load`][Repository::load] or [`save`][Repository::save].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the snapshot lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved index. A repository that was never saved loads as an
    /// empty tree.
    pub fn load(&self) -> Result<Tree<WordInfo>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no repository yet, starting empty");
                return Ok(Tree::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let tree = snapshot::decode(&bytes)?;
        info!(
            path = %self.path.display(),
            words = tree.len(),
            "loaded repository"
        );
        Ok(tree)
    }

    /// Replaces the saved index with `tree`.
    ///
    /// The snapshot is written to a temporary file next to the target and
    /// then renamed over it, so readers only ever see a complete snapshot.
    pub fn save(&self, tree: &Tree<WordInfo>) -> Result<()> {
        let bytes = snapshot::encode(tree)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(
            path = %self.path.display(),
            words = tree.len(),
            bytes = bytes.len(),
            "saved repository"
        );
        Ok(())
    }
}
