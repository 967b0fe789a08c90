use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// How the filesystem classifies one entry. `Other` (sockets, fifos,
/// devices) is grouped like a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Classify an explicit path argument. Follows symlinks, as `stat` would.
///
/// # Errors
/// Returns a `Stat` error when the path does not exist or cannot be read.
pub fn entry_kind(path: &Path) -> Result<EntryKind> {
    let meta = fs::metadata(path).map_err(|e| EngineError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(kind_of(meta.file_type()))
}

/// One directory's enumerated entries plus the per-entry failures
/// encountered along the way.
#[derive(Debug, Default)]
pub struct DirScan {
    pub entries: Vec<(String, EntryKind)>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Enumerate the immediate entries of one directory.
///
/// Hidden (dot-prefixed) names are skipped unless `show_all` is set.
/// Unreadable entries land in `errors` rather than aborting the scan.
#[must_use]
pub fn scan_dir(path: &Path, show_all: bool) -> DirScan {
    let mut scan = DirScan::default();

    let walker = WalkBuilder::new(path)
        .standard_filters(false)
        .hidden(!show_all)
        .follow_links(true)
        .max_depth(Some(1))
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue; // the directory itself
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                let kind = entry.file_type().map_or(EntryKind::Other, kind_of);
                log::debug!("scanned {name}: {kind:?}");
                scan.entries.push((name, kind));
            }
            Err(err) => scan.errors.push((path.to_path_buf(), err.into())),
        }
    }

    scan
}
