pub mod formats;
pub mod geometry;
pub mod raster;

use std::fmt;

pub use formats::{create_icns_file, create_ico_file};
pub use geometry::{bolt_padding, bolt_polygon, Point};
pub use raster::{create_icon, render_icon};

/// Error type for icon generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    RenderFailed { file: String, reason: String },
    WriteFailed { file: String, reason: String },
    BackupFailed { file: String, reason: String },
    ScanFailed { dir: String, reason: String },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::RenderFailed { file, reason } => {
                write!(f, "render failed for '{}': {}", file, reason)
            }
            IconError::WriteFailed { file, reason } => {
                write!(f, "write failed for '{}': {}", file, reason)
            }
            IconError::BackupFailed { file, reason } => {
                write!(f, "backup failed for '{}': {}", file, reason)
            }
            IconError::ScanFailed { dir, reason } => {
                write!(f, "failed to scan '{}': {}", dir, reason)
            }
        }
    }
}

impl std::error::Error for IconError {}
