// Preview sub-provider for the browser's third pane
//
// Directories preview as a one-level listing. Files with a recognized text
// extension preview as a capped head of their contents; anything else gets a
// synthesized metadata block. All reads are best-effort: failures degrade to
// the metadata block, never to an error.

use std::path::Path;

use crate::entry::{Entry, FsKind};
use crate::listing::list_dir;
use crate::util::clip_line;

/// Hard cap on previewed lines of a text file.
const MAX_PREVIEW_LINES: usize = 10_000;

/// Each previewed line is clipped to this many bytes (UTF-8 safe).
const MAX_LINE_BYTES: usize = 80;

/// Extensions rendered as raw text.
const TEXT_EXTS: [&str; 22] = [
    "txt", "md", "csv", "tsv", "json", "toml", "yaml", "yml", "xml", "html", "css", "js", "ts",
    "rs", "py", "sh", "log", "ini", "cfg", "conf", "sql", "lock",
];

/// Content of the preview pane.
#[derive(Debug, Clone)]
pub enum Preview {
    /// Nothing selected (empty current pane)
    Empty,
    /// One-level listing of the selected directory
    Listing(Vec<Entry>),
    /// Head of a text file, lines already clipped for display
    Text(Vec<String>),
    /// Synthesized block for binary/unrecognized files
    Metadata {
        name: String,
        size_bytes: u64,
        kind: FsKind,
    },
}

impl Preview {
    /// Number of scrollable rows this preview produces.
    pub fn len(&self) -> usize {
        match self {
            Preview::Empty => 0,
            Preview::Listing(entries) => entries.len(),
            Preview::Text(lines) => lines.len(),
            Preview::Metadata { .. } => 3,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the preview for the selected entry.
pub fn preview_for(entry: Option<&Entry>, show_hidden: bool) -> Preview {
    let Some(Entry::Fs {
        name,
        path,
        kind,
        size_bytes,
        ..
    }) = entry
    else {
        return Preview::Empty;
    };

    match kind {
        FsKind::Directory | FsKind::ParentMarker => Preview::Listing(list_dir(path, show_hidden)),
        FsKind::File if is_text(name) => match read_text_head(path) {
            Some(lines) => Preview::Text(lines),
            None => metadata(name, *size_bytes, *kind),
        },
        FsKind::File | FsKind::Archive => metadata(name, *size_bytes, *kind),
    }
}

fn metadata(name: &str, size_bytes: u64, kind: FsKind) -> Preview {
    Preview::Metadata {
        name: name.to_string(),
        size_bytes,
        kind,
    }
}

fn is_text(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            TEXT_EXTS.iter().any(|t| *t == ext)
        })
        .unwrap_or(false)
}

/// Read up to MAX_PREVIEW_LINES, each clipped to MAX_LINE_BYTES.
/// Malformed UTF-8 is replaced lossily; a read failure returns None.
fn read_text_head(path: &Path) -> Option<Vec<String>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("cannot preview {}: {err}", path.display());
            return None;
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    Some(
        text.lines()
            .take(MAX_PREVIEW_LINES)
            .map(|line| clip_line(line, MAX_LINE_BYTES))
            .collect(),
    )
}
