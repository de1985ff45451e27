//! Configuration types for the tree renderer

use std::collections::HashSet;

/// Directory names that are never descended into.
pub const EXCLUDED_FOLDERS: &[&str] = &[".git", ".idea", "target", ".build"];

/// File names that are hidden unless explicitly requested.
pub const EXCLUDED_FILES: &[&str] = &[".env"];

/// Annotation appended to an excluded directory that is still shown.
pub const SKIPPED_ANNOTATION: &str = " # Skipped Content";

/// Literal, case-sensitive name sets consulted during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSets {
    folders: HashSet<String>,
    files: HashSet<String>,
}

impl ExclusionSets {
    pub fn new<I, J, S, T>(folders: I, files: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            folders: folders.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded_folder(&self, name: &str) -> bool {
        self.folders.contains(name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }
}

impl Default for ExclusionSets {
    fn default() -> Self {
        Self::new(EXCLUDED_FOLDERS.iter().copied(), EXCLUDED_FILES.iter().copied())
    }
}

/// Connector characters used to draw the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BranchStyle {
    /// Box-drawing characters: `├── `, `└── `, `│   `
    #[default]
    Unicode,
    /// Plain ASCII: `+-- `, `\-- `, `|   `
    Ascii,
}

impl BranchStyle {
    /// Connector printed before an entry's name.
    pub fn branch(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (BranchStyle::Unicode, false) => "├── ",
            (BranchStyle::Unicode, true) => "└── ",
            (BranchStyle::Ascii, false) => "+-- ",
            (BranchStyle::Ascii, true) => "\\-- ",
        }
    }

    /// Prefix segment added for the children of an entry.
    pub fn continuation(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (_, true) => "    ",
            (BranchStyle::Unicode, false) => "│   ",
            (BranchStyle::Ascii, false) => "|   ",
        }
    }
}

/// Immutable settings for one rendering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    pub show_files: bool,
    /// Print excluded file names instead of hiding them
    pub show_excluded_files: bool,
    /// Print excluded directories with an annotation (never descended)
    pub show_excluded_folders: bool,
    pub style: BranchStyle,
    pub exclusions: ExclusionSets,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            show_files: true,
            show_excluded_files: false,
            show_excluded_folders: false,
            style: BranchStyle::Unicode,
            exclusions: ExclusionSets::default(),
        }
    }
}
