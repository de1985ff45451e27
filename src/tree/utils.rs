//! Shared utility functions for tree rendering

use std::cmp::Ordering;
use std::path::Path;

use super::traversal::DirectoryEntry;

/// Total order for siblings: directories first, then names compared
/// case-insensitively, ties broken by the raw names.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(compare_entries);
}

/// Display name of a directory used for the heading line.
/// Filesystem roots have no file name and render as an empty name.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, PathBuf::from(name), false)
    }

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, PathBuf::from(name), true)
    }

    fn sorted_names(mut entries: Vec<DirectoryEntry>) -> Vec<String> {
        sort_entries(&mut entries);
        entries.into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_directories_before_files() {
        let names = sorted_names(vec![file("a.txt"), dir("z"), file("B.txt"), dir("m")]);
        assert_eq!(names, vec!["m", "z", "a.txt", "B.txt"]);
    }

    #[test]
    fn test_case_insensitive_names() {
        let names = sorted_names(vec![file("zebra"), file("Apple"), file("banana")]);
        assert_eq!(names, vec!["Apple", "banana", "zebra"]);
    }

    #[test]
    fn test_case_ties_are_deterministic() {
        let forward = sorted_names(vec![file("readme"), file("README"), file("ReadMe")]);
        let backward = sorted_names(vec![file("ReadMe"), file("README"), file("readme")]);
        assert_eq!(forward, backward);
        assert_eq!(forward, vec!["README", "ReadMe", "readme"]);
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name(Path::new("/tmp/project")), "project");
        assert_eq!(dir_name(Path::new("/")), "");
    }
}
