//! Root validation, output path resolution and file writing

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FolderTreeError, Result};
use crate::tree::{RenderSummary, TreeConfig, TreeRenderer};

use super::sink::WriterSink;

/// Drop `.` components. `..` is kept so the filesystem resolves it through
/// any symbolic links on the way.
fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Make `path` absolute against the current directory.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(strip_cur_dir(path))
    } else {
        Ok(strip_cur_dir(&std::env::current_dir()?.join(path)))
    }
}

/// Resolve the root argument to an absolute path of an existing directory.
///
/// A root containing `..` is canonicalized once it is known to be a
/// directory, so the heading names the directory the filesystem resolved.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root =
        absolute_path(path).map_err(|_| FolderTreeError::InvalidRoot(path.to_path_buf()))?;
    if !root.is_dir() {
        return Err(FolderTreeError::InvalidRoot(root));
    }

    if root.components().any(|c| matches!(c, Component::ParentDir)) {
        return fs::canonicalize(&root).map_err(|_| FolderTreeError::InvalidRoot(root));
    }
    Ok(root)
}

/// Absolute output paths are used as given, relative ones land under `root`.
pub fn resolve_output_path(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        strip_cur_dir(output)
    } else {
        strip_cur_dir(&root.join(output))
    }
}

/// Render the tree below `root` into the file at `output`.
///
/// Parent directories of `output` are created first. The file is created
/// before the walk starts, so an output file inside `root` lists itself.
pub fn write_tree_file(root: &Path, output: &Path, config: &TreeConfig) -> Result<RenderSummary> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| FolderTreeError::write_output(output, e))?;
    }

    let file = File::create(output).map_err(|e| FolderTreeError::write_output(output, e))?;
    let mut sink = WriterSink::new(BufWriter::new(file));
    debug!(root = %root.display(), output = %output.display(), "rendering tree");

    let summary = TreeRenderer::new(config)
        .render(root, &mut sink)
        .map_err(|e| FolderTreeError::write_output(output, e))?;
    let writer = sink
        .finish()
        .map_err(|e| FolderTreeError::write_output(output, e))?;
    writer
        .into_inner()
        .map_err(|e| FolderTreeError::write_output(output, e.into_error()))?
        .sync_all()
        .map_err(|e| FolderTreeError::write_output(output, e))?;

    info!(
        directories = summary.directories,
        files = summary.files,
        excluded = summary.excluded,
        unreadable = summary.unreadable.len(),
        "tree written"
    );
    Ok(summary)
}
