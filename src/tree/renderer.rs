//! TreeRenderer - writes the indented tree one line at a time

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::output::LineSink;

use super::config::{SKIPPED_ANNOTATION, TreeConfig};
use super::traversal::{DirectoryEntry, Listing, read_listing};
use super::utils::dir_name;

/// Counts gathered while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Directory lines emitted below the root
    pub directories: usize,
    pub files: usize,
    /// Excluded entries met, whether annotated or hidden
    pub excluded: usize,
    /// Directories whose contents could not be listed
    pub unreadable: Vec<PathBuf>,
}

/// How a listed child shows up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    /// Print `name/` and recurse
    Descend,
    /// Print `name/ # Skipped Content`, never recurse
    Annotated,
    File,
    Hidden,
}

/// Depth-first renderer over a live directory snapshot.
pub struct TreeRenderer<'a> {
    config: &'a TreeConfig,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self { config }
    }

    /// Write the root heading followed by the whole tree below `root`.
    ///
    /// The root is always printed and descended into, even when its own name
    /// is excluded. Only sink failures are errors.
    pub fn render<S: LineSink + ?Sized>(
        &self,
        root: &Path,
        sink: &mut S,
    ) -> io::Result<RenderSummary> {
        sink.write_line(&format!("{}/", dir_name(root)))?;
        let mut summary = RenderSummary::default();
        self.render_dir(root, "", sink, &mut summary)?;
        Ok(summary)
    }

    /// Emit the children of `dir` under `prefix`, recursing into visible
    /// non-excluded subdirectories.
    pub fn render_dir<S: LineSink + ?Sized>(
        &self,
        dir: &Path,
        prefix: &str,
        sink: &mut S,
        summary: &mut RenderSummary,
    ) -> io::Result<()> {
        let entries = match read_listing(dir) {
            Listing::Entries(entries) => entries,
            Listing::Unreadable(err) => {
                debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
                summary.unreadable.push(dir.to_path_buf());
                return Ok(());
            }
        };

        let mut visible: Vec<(DirectoryEntry, Visibility)> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !entry.is_dir && !self.config.show_files {
                continue;
            }
            let visibility = self.classify(&entry);
            if matches!(visibility, Visibility::Annotated | Visibility::Hidden) {
                summary.excluded += 1;
            }
            if visibility != Visibility::Hidden {
                visible.push((entry, visibility));
            }
        }

        let total = visible.len();
        let style = self.config.style;

        for (i, (entry, visibility)) in visible.into_iter().enumerate() {
            let is_last = i == total - 1;
            let connector = style.branch(is_last);

            match visibility {
                Visibility::Descend => {
                    sink.write_line(&format!("{}{}{}/", prefix, connector, entry.name))?;
                    summary.directories += 1;
                    let child_prefix = format!("{}{}", prefix, style.continuation(is_last));
                    trace!(path = %entry.path.display(), "descending");
                    self.render_dir(&entry.path, &child_prefix, sink, summary)?;
                }
                Visibility::Annotated => {
                    sink.write_line(&format!(
                        "{}{}{}/{}",
                        prefix, connector, entry.name, SKIPPED_ANNOTATION
                    ))?;
                    summary.directories += 1;
                }
                Visibility::File => {
                    sink.write_line(&format!("{}{}{}", prefix, connector, entry.name))?;
                    summary.files += 1;
                }
                Visibility::Hidden => {}
            }
        }

        Ok(())
    }

    fn classify(&self, entry: &DirectoryEntry) -> Visibility {
        let exclusions = &self.config.exclusions;
        if entry.is_dir {
            if !exclusions.is_excluded_folder(&entry.name) {
                Visibility::Descend
            } else if self.config.show_excluded_folders {
                Visibility::Annotated
            } else {
                Visibility::Hidden
            }
        } else if !exclusions.is_excluded_file(&entry.name) || self.config.show_excluded_files {
            Visibility::File
        } else {
            Visibility::Hidden
        }
    }
}

/// Render the tree below `root` into memory, one string per line.
pub fn render_lines(root: &Path, config: &TreeConfig) -> io::Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();
    TreeRenderer::new(config).render(root, &mut lines)?;
    Ok(lines)
}
