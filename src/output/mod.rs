//! Output sinks and file writing
//!
//! - `sink` - the `LineSink` trait and its in-memory and writer implementations
//! - `file` - root/output path resolution and writing the tree to a file

mod file;
mod sink;

pub use file::{absolute_path, resolve_output_path, resolve_root, write_tree_file};
pub use sink::{LineSink, WriterSink};
