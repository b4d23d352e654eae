// Demo mode: build scratch data to showcase both navigators
//
// Creates a small directory tree (directories, text files, an archive, a
// dotfile) under a temporary location and a short sample series, so the
// browser and the editor can be exercised without any host data.
//
// Run with: panenav demo

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Sample time points (weeks) for the editor showcase.
pub const DEMO_TIMES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 6.0];

/// Sample readings for the editor showcase.
pub const DEMO_VALUES: [f64; 5] = [7.2, 7.6, 8.1, 8.4, 9.0];

/// Create the scratch tree and return its root. The caller browses it; the
/// tree is left behind for inspection and lives under the system temp dir.
pub fn build_demo_tree() -> Result<PathBuf> {
    let root = std::env::temp_dir().join("panenav-demo");
    fs::create_dir_all(root.join("measurements")).context("Failed to create demo tree")?;
    fs::create_dir_all(root.join("reports"))?;

    fs::write(
        root.join("measurements").join("week-01.csv"),
        "time,value\n1,7.2\n2,7.6\n",
    )?;
    fs::write(
        root.join("measurements").join("week-02.csv"),
        "time,value\n3,8.1\n4,8.4\n",
    )?;
    fs::write(
        root.join("reports").join("summary.md"),
        "# Summary\n\nReadings are trending upward.\n",
    )?;
    fs::write(root.join("notes.txt"), "remember to import week 3\n")?;
    fs::write(root.join("backup.zip"), b"PK\x03\x04demo")?;
    fs::write(root.join(".hidden-config"), "secret=1\n")?;

    tracing::info!("demo tree created at {}", root.display());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tree_contains_every_entry_kind() {
        let root = build_demo_tree().unwrap();
        assert!(root.join("measurements").is_dir());
        assert!(root.join("backup.zip").is_file());
        assert!(root.join(".hidden-config").is_file());
        assert!(root.join("reports").join("summary.md").is_file());
    }

    #[test]
    fn demo_series_is_pairwise() {
        assert_eq!(DEMO_TIMES.len(), DEMO_VALUES.len());
    }
}
