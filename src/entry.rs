// Pane entries - one row of content in any pane
//
// A single tagged type covers both navigators: filesystem rows carry path
// metadata, editor rows carry a time/value text pair with per-cell validity.
// Render code pattern-matches on the variant; there are no shared
// mode-dependent fields.

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::util::format_size;

/// Classification of a filesystem entry. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsKind {
    /// The ".." row that ascends to the parent directory
    ParentMarker,
    Directory,
    /// Non-directory with a known archive extension
    Archive,
    File,
}

impl FsKind {
    /// Sort rank: parent marker, then directories, then archives, then files.
    fn rank(self) -> u8 {
        match self {
            FsKind::ParentMarker => 0,
            FsKind::Directory => 1,
            FsKind::Archive => 2,
            FsKind::File => 3,
        }
    }

    /// Glyph shown before the name.
    pub fn glyph(self) -> &'static str {
        match self {
            FsKind::ParentMarker => "↩",
            FsKind::Directory => "▸",
            FsKind::Archive => "◆",
            FsKind::File => " ",
        }
    }

    /// Human-readable type name for the preview metadata block.
    pub fn type_name(self) -> &'static str {
        match self {
            FsKind::ParentMarker => "parent",
            FsKind::Directory => "directory",
            FsKind::Archive => "archive",
            FsKind::File => "file",
        }
    }
}

/// One row of pane content.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Filesystem row (browser panes)
    Fs {
        name: String,
        path: PathBuf,
        kind: FsKind,
        size_bytes: u64,
        is_hidden: bool,
    },
    /// Paired time/value row (editor panes). Validity is re-derived on every
    /// text mutation: non-empty and parses as a real number.
    Cell {
        time_text: String,
        value_text: String,
        time_valid: bool,
        value_valid: bool,
    },
}

impl Entry {
    /// Construct the ".." row pointing at `parent`.
    pub fn parent_marker(parent: PathBuf) -> Self {
        Entry::Fs {
            name: "..".to_string(),
            path: parent,
            kind: FsKind::ParentMarker,
            size_bytes: 0,
            is_hidden: false,
        }
    }

    /// Display label for a filesystem row: glyph + name, with an optional
    /// size suffix on non-directories.
    pub fn fs_label(&self, show_size: bool) -> String {
        match self {
            Entry::Fs {
                name,
                kind,
                size_bytes,
                ..
            } => {
                let with_size = show_size && matches!(kind, FsKind::Archive | FsKind::File);
                if with_size {
                    format!("{} {} ({})", kind.glyph(), name, format_size(*size_bytes))
                } else {
                    format!("{} {}", kind.glyph(), name)
                }
            }
            Entry::Cell { .. } => String::new(),
        }
    }

    pub fn fs_kind(&self) -> Option<FsKind> {
        match self {
            Entry::Fs { kind, .. } => Some(*kind),
            Entry::Cell { .. } => None,
        }
    }
}

/// Ordering for directory listings: parent marker and directories before
/// archives before plain files; case-insensitive ascending name within a kind.
pub fn listing_order(a: &Entry, b: &Entry) -> Ordering {
    match (a, b) {
        (
            Entry::Fs {
                kind: ka, name: na, ..
            },
            Entry::Fs {
                kind: kb, name: nb, ..
            },
        ) => ka
            .rank()
            .cmp(&kb.rank())
            .then_with(|| na.to_lowercase().cmp(&nb.to_lowercase())),
        _ => Ordering::Equal,
    }
}
