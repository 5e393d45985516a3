use std::fs;
use std::io;
use std::path::Path;

use crate::config::ICON_EXTENSIONS;

/// Names of every non-directory entry directly inside `dir`, sorted.
/// Symlinks to directories count as directories.
pub fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }
        // Non-UTF-8 names can't be one of ours.
        if let Ok(name) = entry.file_name().into_string() {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

/// Whether `name` ends in one of the icon extensions (case-sensitive).
pub fn is_icon_file(name: &str) -> bool {
    ICON_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Sorted names of the icon files directly inside `dir`.
pub fn list_icon_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = list_files(dir)?;
    files.retain(|name| is_icon_file(name));
    Ok(files)
}
