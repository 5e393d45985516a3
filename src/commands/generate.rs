use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Color, IconConfig, ALIAS_PNGS, ICNS_FILE, ICO_FILE, STORE_LOGOS};
use crate::icon::{create_icns_file, create_ico_file, create_icon, IconError};
use crate::utils::dir_scan::{list_files, list_icon_files};
use crate::utils::file_ops::{backup_file, BackupOutcome};

/// One PNG to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: String,
    /// Draw the dark disk behind the bolt.
    pub background: bool,
}

impl IconSpec {
    fn new(size: u32, file_name: impl Into<String>, background: bool) -> Self {
        IconSpec {
            size,
            file_name: file_name.into(),
            background,
        }
    }
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The output directory exists and generation is about to begin.
    Started { output_dir: PathBuf, accent: Color },
    BackupDirCreated { path: PathBuf },
    BackedUp { file: String },
    AlreadyBackedUp { file: String },
    Created { path: PathBuf, detail: String },
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub backup_dir: PathBuf,
    /// Files moved into the backup directory during this run.
    pub backed_up: Vec<String>,
    /// Files written, in generation order.
    pub created: Vec<PathBuf>,
    /// Every non-directory entry of the output directory afterwards, sorted.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The output directory does not exist; nothing was written.
    MissingOutputDir(PathBuf),
    Generated(GenerationReport),
}

/// PNG icons of a full run, in generation order: the square sizes, the
/// bundler aliases, then the store logos.
pub fn plan_png_icons(config: &IconConfig) -> Vec<IconSpec> {
    let squares = config
        .png_sizes
        .iter()
        .map(|&size| IconSpec::new(size, format!("{}x{}.png", size, size), false));
    let aliases = ALIAS_PNGS
        .iter()
        .map(|&(size, name)| IconSpec::new(size, name, false));
    let store_logos = STORE_LOGOS
        .iter()
        .map(|&(size, name)| IconSpec::new(size, name, true));

    squares.chain(aliases).chain(store_logos).collect()
}

/// Generate the full icon set into `config.output_dir`.
///
/// Workflow:
/// 1. Bail out softly if the output directory is missing
/// 2. Move pre-existing icons into the backup directory
/// 3. Render every PNG, then the ICO and ICNS containers
/// 4. List the resulting directory contents
pub fn run<F>(config: &IconConfig, mut on_progress: F) -> Result<RunOutcome, IconError>
where
    F: FnMut(ProgressEvent),
{
    let output_dir = &config.output_dir;
    if !output_dir.is_dir() {
        return Ok(RunOutcome::MissingOutputDir(output_dir.clone()));
    }

    on_progress(ProgressEvent::Started {
        output_dir: output_dir.clone(),
        accent: config.palette.accent,
    });

    // Backup phase
    let backup_dir = config.backup_dir();
    let backed_up = backup_existing(output_dir, &backup_dir, &mut on_progress)?;

    // Render phase
    let mut created = Vec::new();

    for spec in plan_png_icons(config) {
        let path = output_dir.join(&spec.file_name);
        create_icon(spec.size, &path, spec.background, &config.palette)?;
        on_progress(ProgressEvent::Created {
            path: path.clone(),
            detail: format!("{}x{}", spec.size, spec.size),
        });
        created.push(path);
    }

    let ico_path = output_dir.join(ICO_FILE);
    create_ico_file(&config.ico_sizes, &config.palette, &ico_path)?;
    on_progress(ProgressEvent::Created {
        path: ico_path.clone(),
        detail: format!("ICO with sizes: {:?}", config.ico_sizes),
    });
    created.push(ico_path);

    let icns_path = output_dir.join(ICNS_FILE);
    create_icns_file(&config.icns_sizes, &config.palette, &icns_path)?;
    on_progress(ProgressEvent::Created {
        path: icns_path.clone(),
        detail: format!("ICNS with sizes: {:?}", config.icns_sizes),
    });
    created.push(icns_path);

    let files = list_files(output_dir).map_err(|e| scan_failed(output_dir, e))?;

    tracing::info!(created = created.len(), backed_up = backed_up.len(), "icon generation complete");

    Ok(RunOutcome::Generated(GenerationReport {
        output_dir: output_dir.clone(),
        backup_dir,
        backed_up,
        created,
        files,
    }))
}

/// Move every icon file directly inside `output_dir` into `backup_dir`,
/// unless a file of that name was backed up on an earlier run.
///
/// Returns the names moved during this call.
pub fn backup_existing<F>(
    output_dir: &Path,
    backup_dir: &Path,
    on_progress: &mut F,
) -> Result<Vec<String>, IconError>
where
    F: FnMut(ProgressEvent),
{
    if !backup_dir.is_dir() {
        fs::create_dir_all(backup_dir).map_err(|e| IconError::BackupFailed {
            file: backup_dir.display().to_string(),
            reason: format!("failed to create backup directory: {}", e),
        })?;
        on_progress(ProgressEvent::BackupDirCreated {
            path: backup_dir.to_path_buf(),
        });
    }

    let mut moved = Vec::new();

    for file in list_icon_files(output_dir).map_err(|e| scan_failed(output_dir, e))? {
        let outcome =
            backup_file(&output_dir.join(&file), backup_dir).map_err(|e| IconError::BackupFailed {
                file: file.clone(),
                reason: e.to_string(),
            })?;

        match outcome {
            BackupOutcome::Moved => {
                on_progress(ProgressEvent::BackedUp { file: file.clone() });
                moved.push(file);
            }
            BackupOutcome::AlreadyBackedUp => {
                on_progress(ProgressEvent::AlreadyBackedUp { file });
            }
        }
    }

    Ok(moved)
}

fn scan_failed(dir: &Path, e: std::io::Error) -> IconError {
    IconError::ScanFailed {
        dir: dir.display().to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generated(outcome: RunOutcome) -> GenerationReport {
        match outcome {
            RunOutcome::Generated(report) => report,
            RunOutcome::MissingOutputDir(dir) => panic!("missing output dir {}", dir.display()),
        }
    }

    #[test]
    fn plan_covers_every_png() {
        let plan = plan_png_icons(&IconConfig::default());

        assert_eq!(plan.len(), 17);
        assert_eq!(plan[0], IconSpec::new(32, "32x32.png", false));
        assert_eq!(plan[4], IconSpec::new(1024, "1024x1024.png", false));
        assert_eq!(plan[5], IconSpec::new(128, "128x128@2x.png", false));
        assert_eq!(plan[6], IconSpec::new(512, "icon.png", false));
        assert!(plan[7..].iter().all(|spec| spec.background));
        assert_eq!(plan[16], IconSpec::new(50, "StoreLogo.png", true));
    }

    #[test]
    fn missing_output_dir_writes_nothing() {
        let parent = tempdir().unwrap();
        let config = IconConfig::with_output_dir(parent.path().join("icons"));
        let mut events = Vec::new();

        let outcome = run(&config, |e| events.push(e)).unwrap();

        assert_eq!(
            outcome,
            RunOutcome::MissingOutputDir(parent.path().join("icons"))
        );
        assert!(events.is_empty());
        assert!(list_files(parent.path()).unwrap().is_empty());
        assert!(!parent.path().join("icons").exists());
    }

    #[test]
    fn started_is_reported_before_any_work() {
        let dir = tempdir().unwrap();
        let config = IconConfig::with_output_dir(dir.path());
        let mut events = Vec::new();

        run(&config, |e| events.push(e)).unwrap();

        assert_eq!(
            events[0],
            ProgressEvent::Started {
                output_dir: dir.path().to_path_buf(),
                accent: config.palette.accent,
            }
        );
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, ProgressEvent::Started { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn empty_dir_produces_full_icon_set() {
        let dir = tempdir().unwrap();
        let config = IconConfig::with_output_dir(dir.path());

        let report = generated(run(&config, |_| {}).unwrap());

        assert_eq!(report.created.len(), 19);
        assert_eq!(report.files.len(), 19);
        assert!(report.backed_up.is_empty());

        for name in [
            "32x32.png",
            "128x128.png",
            "256x256.png",
            "512x512.png",
            "1024x1024.png",
            "128x128@2x.png",
            "icon.png",
            "Square30x30Logo.png",
            "Square310x310Logo.png",
            "StoreLogo.png",
            "icon.ico",
            "icon.icns",
        ] {
            assert!(report.files.iter().any(|f| f == name), "missing {}", name);
        }

        let mut sorted = report.files.clone();
        sorted.sort();
        assert_eq!(report.files, sorted);

        let backup_dir = dir.path().join("backup_original");
        assert!(backup_dir.is_dir());
        assert!(list_files(&backup_dir).unwrap().is_empty());
    }

    #[test]
    fn pngs_match_their_specs() {
        let dir = tempdir().unwrap();
        let config = IconConfig::with_output_dir(dir.path());

        run(&config, |_| {}).unwrap();

        for spec in plan_png_icons(&config) {
            let image = image::open(dir.path().join(&spec.file_name))
                .unwrap()
                .to_rgba8();
            assert_eq!(image.dimensions(), (spec.size, spec.size), "{}", spec.file_name);

            let center = image.get_pixel(spec.size / 2, spec.size / 2);
            assert_ne!(center.0[3], 0, "{}", spec.file_name);

            if !spec.background {
                let last = spec.size - 1;
                for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                    assert_eq!(image.get_pixel(x, y).0[3], 0, "{}", spec.file_name);
                }
            }
        }
    }

    #[test]
    fn existing_icons_are_moved_to_backup() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icon.png"), b"old png").unwrap();
        fs::write(dir.path().join("icon.icns"), b"old icns").unwrap();
        fs::write(dir.path().join("legacy.ico"), b"old ico").unwrap();
        fs::write(dir.path().join("README.md"), b"notes").unwrap();
        let config = IconConfig::with_output_dir(dir.path());
        let mut events = Vec::new();

        let report = generated(run(&config, |e| events.push(e)).unwrap());

        assert_eq!(report.backed_up, vec!["icon.icns", "icon.png", "legacy.ico"]);
        assert!(events.contains(&ProgressEvent::BackedUp {
            file: "legacy.ico".to_string()
        }));

        let backup_dir = dir.path().join("backup_original");
        assert_eq!(fs::read(backup_dir.join("icon.png")).unwrap(), b"old png");
        assert_eq!(fs::read(backup_dir.join("icon.icns")).unwrap(), b"old icns");
        assert_eq!(fs::read(backup_dir.join("legacy.ico")).unwrap(), b"old ico");

        // Non-icon files stay put; moved icons are regenerated.
        assert!(dir.path().join("README.md").exists());
        assert!(!dir.path().join("legacy.ico").exists());
        assert_ne!(fs::read(dir.path().join("icon.png")).unwrap(), b"old png");
        assert_eq!(report.files.len(), 20);
    }

    #[test]
    fn repeated_runs_keep_first_backup() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icon.png"), b"old png").unwrap();
        let config = IconConfig::with_output_dir(dir.path());
        let backup_dir = dir.path().join("backup_original");

        let first = generated(run(&config, |_| {}).unwrap());
        assert_eq!(first.backed_up, vec!["icon.png"]);

        // The second run backs up what the first one generated, except the
        // name that already has a backup.
        let mut events = Vec::new();
        let second = generated(run(&config, |e| events.push(e)).unwrap());

        assert_eq!(second.backed_up.len(), 18);
        assert!(!second.backed_up.iter().any(|f| f == "icon.png"));
        assert!(events.contains(&ProgressEvent::AlreadyBackedUp {
            file: "icon.png".to_string()
        }));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, ProgressEvent::BackupDirCreated { .. }))
        );
        assert_eq!(fs::read(backup_dir.join("icon.png")).unwrap(), b"old png");

        let third = generated(run(&config, |_| {}).unwrap());

        assert!(third.backed_up.is_empty());
        assert_eq!(third.files.len(), 19);
        assert_eq!(list_files(&backup_dir).unwrap(), third.files);
        assert_eq!(fs::read(backup_dir.join("icon.png")).unwrap(), b"old png");
    }

    #[test]
    fn backup_dir_created_once() {
        let dir = tempdir().unwrap();
        let backup_dir = dir.path().join("backup_original");
        let mut events = Vec::new();

        backup_existing(dir.path(), &backup_dir, &mut |e| events.push(e)).unwrap();
        backup_existing(dir.path(), &backup_dir, &mut |e| events.push(e)).unwrap();

        assert_eq!(
            events,
            vec![ProgressEvent::BackupDirCreated { path: backup_dir }]
        );
    }

    #[test]
    fn progress_reports_every_created_file() {
        let dir = tempdir().unwrap();
        let config = IconConfig::with_output_dir(dir.path());
        let mut created = Vec::new();

        run(&config, |e| {
            if let ProgressEvent::Created { path, detail } = e {
                created.push((path, detail));
            }
        })
        .unwrap();

        assert_eq!(created.len(), 19);
        assert_eq!(created[0], (dir.path().join("32x32.png"), "32x32".to_string()));
        assert_eq!(created[17].0, dir.path().join("icon.ico"));
        assert_eq!(created[17].1, "ICO with sizes: [16, 32, 48, 256]");
        assert_eq!(created[18].0, dir.path().join("icon.icns"));
    }
}
