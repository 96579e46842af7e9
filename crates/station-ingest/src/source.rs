//! Station source references.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use station_common::LoadResult;

/// Where station rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk
    Path(PathBuf),

    /// An in-memory table
    Inline { name: String, content: String },
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }

    /// An in-memory table. Loads are memoized by name and a checksum of
    /// `content`, so two tables sharing a name never share a cached result.
    pub fn inline(name: impl Into<String>, content: impl Into<String>) -> Self {
        Source::Inline {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Identity used to memoize loads.
    pub fn key(&self) -> SourceKey {
        match self {
            Source::Path(path) => SourceKey::Path(path.clone()),
            Source::Inline { name, content } => SourceKey::Inline {
                name: name.clone(),
                checksum: crc32fast::hash(content.as_bytes()),
            },
        }
    }

    /// Open the source for reading.
    pub(crate) fn open(&self) -> LoadResult<Box<dyn Read + '_>> {
        match self {
            Source::Path(path) => {
                let file = File::open(path).map_err(|e| annotate(e, path))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Source::Inline { content, .. } => Ok(Box::new(content.as_bytes())),
        }
    }
}

fn annotate(err: std::io::Error, path: &Path) -> std::io::Error {
    std::io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

/// Hashable identity of a [`Source`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum SourceKey {
    Path(PathBuf),
    Inline { name: String, checksum: u32 },
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKey::Path(path) => write!(f, "{}", path.display()),
            SourceKey::Inline { name, checksum } => {
                write!(f, "inline:{}#{:08x}", name, checksum)
            }
        }
    }
}
