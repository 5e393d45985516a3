use std::fmt;
use std::path::{Path, PathBuf};

use image::Rgba;

/// Tauri icon directory of the LUME desktop app.
pub const DEFAULT_OUTPUT_DIR: &str = "/Volumes/Olson/GITSTUFF/LUME/src/lume_desk/src-tauri/icons";

/// Subdirectory of the output directory that receives pre-existing icons.
pub const BACKUP_DIR: &str = "backup_original";

pub const ICO_FILE: &str = "icon.ico";
pub const ICNS_FILE: &str = "icon.icns";

/// File extensions treated as icons by the backup step.
pub const ICON_EXTENSIONS: &[&str] = &[".png", ".ico", ".icns"];

/// Extra bolt-only PNGs expected by the Tauri bundler.
pub const ALIAS_PNGS: &[(u32, &str)] = &[(128, "128x128@2x.png"), (512, "icon.png")];

/// Microsoft Store logos, drawn on the dark disk background.
pub const STORE_LOGOS: &[(u32, &str)] = &[
    (30, "Square30x30Logo.png"),
    (44, "Square44x44Logo.png"),
    (71, "Square71x71Logo.png"),
    (89, "Square89x89Logo.png"),
    (107, "Square107x107Logo.png"),
    (142, "Square142x142Logo.png"),
    (150, "Square150x150Logo.png"),
    (284, "Square284x284Logo.png"),
    (310, "Square310x310Logo.png"),
    (50, "StoreLogo.png"),
];

/// An RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 0xFF])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Brand colors used to draw the bolt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Bolt fill and disk ring.
    pub accent: Color,
    /// Canvas and disk fill of background icons.
    pub background: Color,
    /// Bolt outline.
    pub outline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            accent: Color::rgb(0xFF, 0x6B, 0x35),
            background: Color::rgb(0x1A, 0x1A, 0x1A),
            outline: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Everything the generator needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub palette: Palette,
    /// Sizes written as `{size}x{size}.png`.
    pub png_sizes: Vec<u32>,
    /// Frames of `icon.ico`, in encoding order.
    pub ico_sizes: Vec<u32>,
    /// Frames of `icon.icns`.
    pub icns_sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: Palette::default(),
            png_sizes: vec![32, 128, 256, 512, 1024],
            ico_sizes: vec![16, 32, 48, 256],
            icns_sizes: vec![16, 32, 64, 128, 256, 512, 1024],
        }
    }
}

impl IconConfig {
    /// Default configuration writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        IconConfig {
            output_dir: output_dir.into(),
            ..IconConfig::default()
        }
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.output_dir.join(BACKUP_DIR)
    }

    /// Root of the Tauri app that owns the icon directory
    /// (`<app>/src-tauri/icons`).
    pub fn app_dir(&self) -> &Path {
        self.output_dir
            .parent()
            .and_then(Path::parent)
            .unwrap_or(&self.output_dir)
    }
}
