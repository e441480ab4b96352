use core::fmt;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use memmap2::Mmap;

use crate::error::{Error, IoStage, Result};

///
/// A whole file mapped read-only in memory, searched as one contiguous buffer
pub struct MappedFile {
    path: PathBuf,
    mmap: Mmap,
}
impl MappedFile {
    ///
    /// Map the file at `path`.
    /// Empty files and anything that isn't a regular file (directory, fifo...) give `Ok(None)`:
    /// there's nothing to search in them.
    pub fn open(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::io(IoStage::Open, path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Error::io(IoStage::Stat, path, err))?;

        if !metadata.is_file() {
            warn!("{}: not a regular file, skipped", path.display());
            return Ok(None);
        }
        if metadata.len() == 0 {
            debug!("{}: empty, skipped", path.display());
            return Ok(None);
        }

        // SAFETY: the map is read-only; the file must not be truncated or
        // modified by another process while it is searched.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|err| Error::io(IoStage::Mmap, path, err))?;
        debug!("{}: {} bytes mapped", path.display(), mmap.len());

        Ok(Some(Self {
            path: path.to_path_buf(),
            mmap,
        }))
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.mmap
    }
}

impl fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path={:?} len={}", self.path, self.mmap.len())
    }
}
