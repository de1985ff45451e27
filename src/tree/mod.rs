//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first and writes one line per
//! visible entry to a `LineSink`, drawing branches with the configured style.

mod config;
mod renderer;
mod traversal;
mod utils;

pub use config::{
    BranchStyle, EXCLUDED_FILES, EXCLUDED_FOLDERS, ExclusionSets, SKIPPED_ANNOTATION, TreeConfig,
};
pub use renderer::{RenderSummary, TreeRenderer, render_lines};
pub use traversal::{DirectoryEntry, Listing, read_listing};
pub use utils::{compare_entries, dir_name, sort_entries};
