// Directory listing provider for the browser panes
//
// Listing a directory never fails from the navigator's point of view: a
// permission error or a vanished path yields an empty pane, logged at warn
// level, and the UI simply renders nothing.

use std::path::Path;

use crate::entry::{listing_order, Entry, FsKind};

/// Extensions classified as archives.
const ARCHIVE_EXTS: [&str; 6] = ["zip", "rar", "7z", "tar", "gz", "bz2"];

/// List `path`, classified and sorted, dotfiles filtered unless `show_hidden`.
///
/// The ".." parent marker is NOT included here; the browser prepends it when
/// the listed directory has a parent (roots never get one).
pub fn list_dir(path: &Path, show_hidden: bool) -> Vec<Entry> {
    let reader = match std::fs::read_dir(path) {
        Ok(reader) => reader,
        Err(err) => {
            tracing::warn!("cannot list {}: {err}", path.display());
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for dirent in reader.flatten() {
        let name = dirent.file_name().to_string_lossy().into_owned();
        let is_hidden = name.starts_with('.');
        if is_hidden && !show_hidden {
            continue;
        }

        // Entries that vanish mid-listing are skipped, not fatal
        let Ok(meta) = dirent.metadata() else {
            continue;
        };

        let full_path = dirent.path();
        let kind = if meta.is_dir() {
            FsKind::Directory
        } else if is_archive(&name) {
            FsKind::Archive
        } else {
            FsKind::File
        };

        entries.push(Entry::Fs {
            name,
            path: full_path,
            kind,
            size_bytes: meta.len(),
            is_hidden,
        });
    }

    entries.sort_by(listing_order);
    entries
}

/// Whether the listed path is a filesystem root: "/" on Unix,
/// a drive-letter or UNC root on Windows. `Path::parent()` returns `None`
/// exactly for those, on both families.
pub fn is_fs_root(path: &Path) -> bool {
    path.parent().is_none()
}

fn is_archive(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ARCHIVE_EXTS.iter().any(|a| *a == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::FsKind;
    use std::fs;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                Entry::Fs { name, .. } => name.clone(),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn lists_sorted_dirs_before_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();
        fs::write(dir.path().join("old.tar"), "x").unwrap();

        let entries = list_dir(dir.path(), false);
        assert_eq!(names(&entries), vec!["zdir", "old.tar", "a.txt", "b.txt"]);
        assert_eq!(entries[0].fs_kind(), Some(FsKind::Directory));
        assert_eq!(entries[1].fs_kind(), Some(FsKind::Archive));
    }

    #[test]
    fn hidden_files_filtered_unless_configured() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".secret"), "x").unwrap();
        fs::write(dir.path().join("plain.txt"), "x").unwrap();

        assert_eq!(names(&list_dir(dir.path(), false)), vec!["plain.txt"]);
        assert_eq!(
            names(&list_dir(dir.path(), true)),
            vec![".secret", "plain.txt"]
        );
    }

    #[test]
    fn unreadable_directory_yields_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(list_dir(&gone, true).is_empty());
    }

    #[test]
    fn archive_classification_is_case_insensitive() {
        assert!(is_archive("backup.ZIP"));
        assert!(is_archive("logs.tar"));
        assert!(is_archive("x.7z"));
        assert!(!is_archive("notes.txt"));
        assert!(!is_archive("Makefile"));
    }

    #[test]
    fn root_detection() {
        #[cfg(unix)]
        {
            assert!(is_fs_root(Path::new("/")));
            assert!(!is_fs_root(Path::new("/home")));
        }
        #[cfg(windows)]
        {
            assert!(is_fs_root(Path::new("C:\\")));
            assert!(!is_fs_root(Path::new("C:\\Users")));
        }
    }
}
