//! Font file cache
//!
//! The cache is best-effort memoization: a missing or losing write only means
//! the font is downloaded again on a later run.

use crate::constants::FONT_FILE_EXTENSION;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value store of font files keyed by logical font name
pub trait FontCache {
    /// Whether a font file exists for `name`
    fn has(&self, name: &str) -> bool;
    /// Read the font file for `name`
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
    /// Store the font file for `name`
    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Directory of `{name}.ttf` files, created on first write
#[derive(Debug, Clone)]
pub struct DirFontCache {
    dir: PathBuf,
}

impl DirFontCache {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
        }
    }

    /// Path of the cached file for a logical name
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, FONT_FILE_EXTENSION))
    }
}

impl FontCache for DirFontCache {
    fn has(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.path_for(name))
    }

    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Write aside and rename so a concurrent reader never sees a partial file
        let target = self.path_for(name);
        let partial = self
            .dir
            .join(format!("{}.{}.{}.part", name, FONT_FILE_EXTENSION, std::process::id()));
        std::fs::write(&partial, bytes)?;
        if let Err(e) = std::fs::rename(&partial, &target) {
            let _ = std::fs::remove_file(&partial);
            if !target.is_file() {
                return Err(e);
            }
        }
        Ok(())
    }
}
