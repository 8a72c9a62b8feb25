//! Text rendering of a walked tree
//!
//! Directories are listed group by group, showing at most `max_dirs` members
//! of each identical group and summarizing the rest, followed by the
//! retained files and a summary of hidden ones.

use crate::tree::group::group_identical;
use crate::tree::node::{DirectoryNode, FileEntry};
use crate::tree::path;
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};
use std::path::MAIN_SEPARATOR;

/// One line under a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    Directory(&'a DirectoryNode),
    /// Members of an identical group that were not expanded
    Collapsed { count: usize },
    File(&'a FileEntry),
    /// Files dropped by the per-directory limit
    FileSummary {
        immediate_dirs: usize,
        immediate_files: usize,
        shown: usize,
    },
}

/// Lazily produce the display items of `dir`.
///
/// `max_dirs` bounds the members expanded per identical group (None = all).
pub fn display_items(
    dir: &DirectoryNode,
    max_dirs: Option<usize>,
) -> impl Iterator<Item = DisplayItem<'_>> + '_ {
    let limit = max_dirs.unwrap_or(usize::MAX);

    let directories = group_identical(&dir.children)
        .into_iter()
        .flat_map(move |group| {
            let shown = group.len().min(limit);
            let omitted = group.len() - shown;
            group
                .members
                .into_iter()
                .take(shown)
                .map(DisplayItem::Directory)
                .chain((omitted > 0).then_some(DisplayItem::Collapsed { count: omitted }))
        });

    let files = dir.files.iter().map(DisplayItem::File);

    let summary = (dir.hidden_file_count > 0).then(|| DisplayItem::FileSummary {
        immediate_dirs: dir.immediate_dir_count,
        immediate_files: dir.immediate_file_count,
        shown: dir.immediate_file_count - dir.hidden_file_count,
    });

    directories.chain(files).chain(summary)
}

/// Label printed for the root: `.` as-is, input with a trailing separator
/// verbatim, anything else cleaned and suffixed with a separator.
pub fn root_label(input: &str) -> String {
    if input.is_empty() {
        return ".".to_string();
    }
    let cleaned = path::clean_path(std::path::Path::new(input));
    let cleaned = cleaned.to_string_lossy();
    if cleaned == "." {
        return cleaned.into_owned();
    }
    if input.ends_with(MAIN_SEPARATOR) || input.ends_with('/') {
        return input.to_string();
    }
    format!("{}{}", cleaned, MAIN_SEPARATOR)
}

/// Styles for each kind of line. Disabled palettes emit plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
    dir: Style,
    file: Style,
    summary: Style,
    stats: Style,
    error: Style,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            dir: Style::new().blue().bold(),
            file: Style::new().white(),
            summary: Style::new().dimmed(),
            stats: Style::new().green().bold(),
            error: Style::new().red().bold(),
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Writes a tree in the box-drawing layout.
#[derive(Debug, Clone, Copy)]
pub struct TreePrinter {
    palette: Palette,
    max_dirs: Option<usize>,
}

impl TreePrinter {
    pub fn new(palette: Palette, max_dirs: Option<usize>) -> Self {
        Self { palette, max_dirs }
    }

    /// Print `root` under `label`, followed by the directory and file totals.
    pub fn print<W: Write>(&self, out: &mut W, label: &str, root: &DirectoryNode) -> io::Result<()> {
        writeln!(out, "{}", self.palette.paint(label, self.palette.dir))?;
        self.print_children(out, root, "")?;
        let stats = format!(
            "[{} directories, {} files]",
            root.total_dir_count + 1,
            root.total_file_count
        );
        writeln!(out, "{}", self.palette.paint(&stats, self.palette.stats))
    }

    /// Render into a string.
    pub fn render(&self, label: &str, root: &DirectoryNode) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.print(&mut buffer, label, root)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn print_children<W: Write>(&self, out: &mut W, dir: &DirectoryNode, prefix: &str) -> io::Result<()> {
        let palette = &self.palette;
        let mut items = display_items(dir, self.max_dirs).peekable();

        while let Some(item) = items.next() {
            let is_last = items.peek().is_none();
            let connector = if is_last { "└── " } else { "├── " };

            match item {
                DisplayItem::Directory(child) => {
                    let label = palette.paint(&child.name, palette.dir);
                    match child.error() {
                        Some(err) => {
                            let annotation = if err.is_permission_denied() {
                                palette.paint("[Permission denied]", palette.summary)
                            } else {
                                let message = err.message.trim();
                                let message = if message.is_empty() { "error" } else { message };
                                palette.paint(&format!("[{}]", message), palette.error)
                            };
                            writeln!(out, "{}{}{} {}", prefix, connector, label, annotation)?;
                        }
                        None => {
                            writeln!(out, "{}{}{}/", prefix, connector, label)?;
                            let next_prefix = extend_prefix(prefix, is_last);
                            self.print_children(out, child, &next_prefix)?;
                        }
                    }
                }
                DisplayItem::Collapsed { count } => {
                    let text = format!("... ({} identical dirs)", count);
                    writeln!(out, "{}{}{}", prefix, connector, palette.paint(&text, palette.summary))?;
                }
                DisplayItem::File(file) => {
                    writeln!(out, "{}{}{}", prefix, connector, palette.paint(&file.name, palette.file))?;
                }
                DisplayItem::FileSummary {
                    immediate_dirs,
                    immediate_files,
                    shown,
                } => {
                    let text = format!(
                        "... [{} directories, {} files, showing first {}]",
                        immediate_dirs, immediate_files, shown
                    );
                    writeln!(out, "{}{}{}", prefix, connector, palette.paint(&text, palette.summary))?;
                }
            }
        }
        Ok(())
    }
}

fn extend_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
