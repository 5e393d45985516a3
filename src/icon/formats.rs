//! Multi-resolution icon containers.
//!
//! - ICO for Windows
//! - ICNS for macOS

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Palette;
use crate::icon::raster::render_icon;
use crate::icon::IconError;

/// Largest frame an ICO directory entry can describe.
const ICO_MAX_SIZE: u32 = 256;

/// Write a Windows ICO holding one bolt-only frame per entry of `sizes`,
/// in the given order.
pub fn create_ico_file(sizes: &[u32], palette: &Palette, output: &Path) -> Result<(), IconError> {
    let file_name = output.display().to_string();
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in sizes {
        if size == 0 || size > ICO_MAX_SIZE {
            return Err(IconError::RenderFailed {
                file: file_name,
                reason: format!("ICO frames must be 1-{} pixels, got {}", ICO_MAX_SIZE, size),
            });
        }

        let rgba = render_icon(size, palette, false);
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image).map_err(|e| IconError::RenderFailed {
            file: file_name.clone(),
            reason: format!("failed to encode {}x{} frame: {}", size, size, e),
        })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(output).map_err(|e| IconError::WriteFailed {
        file: file_name.clone(),
        reason: e.to_string(),
    })?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| IconError::WriteFailed {
            file: file_name,
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %output.display(), ?sizes, "wrote ico");
    Ok(())
}

/// Write a macOS icon family holding one bolt-only image per entry of
/// `sizes`. Each size must map onto an ICNS icon type (1024 is stored as
/// the 512@2x slot).
pub fn create_icns_file(sizes: &[u32], palette: &Palette, output: &Path) -> Result<(), IconError> {
    let file_name = output.display().to_string();
    let mut family = icns::IconFamily::new();

    for &size in sizes {
        let icon_type =
            icns::IconType::from_pixel_size(size, size).ok_or_else(|| IconError::RenderFailed {
                file: file_name.clone(),
                reason: format!("no ICNS icon type holds {}x{} images", size, size),
            })?;

        let rgba = render_icon(size, palette, false);
        let image = icns::Image::from_data(icns::PixelFormat::RGBA, size, size, rgba.into_raw())
            .map_err(|e| IconError::RenderFailed {
                file: file_name.clone(),
                reason: e.to_string(),
            })?;
        family
            .add_icon_with_type(&image, icon_type)
            .map_err(|e| IconError::RenderFailed {
                file: file_name.clone(),
                reason: format!("failed to encode {}x{} image: {}", size, size, e),
            })?;
    }

    let file = File::create(output).map_err(|e| IconError::WriteFailed {
        file: file_name.clone(),
        reason: e.to_string(),
    })?;
    family
        .write(BufWriter::new(file))
        .map_err(|e| IconError::WriteFailed {
            file: file_name,
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %output.display(), ?sizes, "wrote icns");
    Ok(())
}
