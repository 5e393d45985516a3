use std::fs;
use std::io;
use std::path::Path;

/// What happened to a file offered to [`backup_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The file was moved into the backup directory.
    Moved,
    /// A file of the same name was already backed up; the original is left in place.
    AlreadyBackedUp,
}

/// Move a file into a backup directory, preserving the filename.
/// Creates the backup directory if it doesn't exist.
///
/// An existing backup is never overwritten, so the first backed-up copy of
/// each name survives repeated runs.
pub fn backup_file(file: &Path, backup_dir: &Path) -> io::Result<BackupOutcome> {
    let filename = file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no filename"))?;

    let backup_path = backup_dir.join(filename);
    if backup_path.exists() {
        return Ok(BackupOutcome::AlreadyBackedUp);
    }

    fs::create_dir_all(backup_dir)?;
    fs::rename(file, &backup_path)?;

    tracing::debug!(from = %file.display(), to = %backup_path.display(), "moved into backup");
    Ok(BackupOutcome::Moved)
}
