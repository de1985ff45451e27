//! foldertree - write a directory tree to a text file, skipping build output and secrets

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{FolderTreeError, Result};
pub use output::{LineSink, WriterSink, resolve_output_path, resolve_root, write_tree_file};
pub use tree::{
    BranchStyle, ExclusionSets, Listing, RenderSummary, TreeConfig, TreeRenderer, read_listing,
    render_lines,
};
