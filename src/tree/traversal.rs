//! Directory listing for the tree renderer.
//!
//! Listing a directory is the only filesystem access the renderer performs.
//! Failure to list is an explicit [`Listing::Unreadable`] outcome instead of
//! an error so the walk can skip the subtree and keep going.

use std::io;
use std::path::{Path, PathBuf};

use super::utils::sort_entries;

/// A child of a listed directory, read fresh at visit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    /// Follows symbolic links, so a link to a directory counts as a directory.
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }

    fn from_dir_entry(entry: std::fs::DirEntry) -> Self {
        let path = entry.path();
        let is_dir = path.is_dir();
        Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            is_dir,
        }
    }
}

/// Outcome of listing one directory.
#[derive(Debug)]
pub enum Listing {
    /// Sorted children; empty for an empty directory.
    Entries(Vec<DirectoryEntry>),
    /// The directory could not be read.
    Unreadable(io::Error),
}

impl Listing {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Listing::Unreadable(_))
    }

    /// Entries of a readable listing, nothing for an unreadable one.
    pub fn into_entries(self) -> Vec<DirectoryEntry> {
        match self {
            Listing::Entries(entries) => entries,
            Listing::Unreadable(_) => Vec::new(),
        }
    }
}

/// List and sort the immediate children of `dir`.
///
/// Entries that fail to read individually are dropped.
pub fn read_listing(dir: &Path) -> Listing {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) => return Listing::Unreadable(err),
    };

    let mut entries: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(DirectoryEntry::from_dir_entry)
        .collect();
    sort_entries(&mut entries);

    Listing::Entries(entries)
}
