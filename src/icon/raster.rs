use std::ops::Range;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::config::{Color, Palette};
use crate::icon::geometry::{bolt_padding, bolt_polygon, Point};
use crate::icon::IconError;

/// Draw the bolt on a `size` x `size` RGBA canvas.
///
/// Without `background` the canvas stays transparent around the bolt. With
/// it, the canvas is filled with the background color and a disk inset by
/// `size / 8` is drawn behind the bolt with an accent ring.
pub fn render_icon(size: u32, palette: &Palette, background: bool) -> RgbaImage {
    let base = if background {
        palette.background
    } else {
        Color::TRANSPARENT
    };
    let mut canvas = RgbaImage::from_pixel(size, size, base.to_rgba());

    if background {
        draw_disk(
            &mut canvas,
            size / 8,
            palette.background,
            palette.accent,
            stroke_width(size, 64),
        );
    }

    let bolt = bolt_polygon(size, size, bolt_padding(size));
    fill_polygon(&mut canvas, &bolt, palette.accent);
    stroke_polygon(&mut canvas, &bolt, stroke_width(size, 128), palette.outline);

    canvas
}

/// Render a single icon and write it to `path` as PNG.
pub fn create_icon(
    size: u32,
    path: &Path,
    background: bool,
    palette: &Palette,
) -> Result<(), IconError> {
    let canvas = render_icon(size, palette, background);

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::WriteFailed {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), size, background, "wrote png icon");
    Ok(())
}

fn stroke_width(size: u32, divisor: u32) -> u32 {
    (size / divisor).max(1)
}

/// Fill a circle whose bounding box is inset by `inset` on every side, with
/// a ring of `width` pixels along its rim.
fn draw_disk(canvas: &mut RgbaImage, inset: u32, fill: Color, ring: Color, width: u32) {
    let size = canvas.width().min(canvas.height());
    let center = f64::from(size) / 2.0;
    let radius = f64::from(size.saturating_sub(2 * inset)) / 2.0;
    let inner = radius - f64::from(width);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let d = (f64::from(x) - center).hypot(f64::from(y) - center);
        if d <= radius {
            let color = if d > inner { ring } else { fill };
            *pixel = color.to_rgba();
        }
    }
}

fn fill_polygon(canvas: &mut RgbaImage, polygon: &[Point], color: Color) {
    let Some((xs, ys)) = pixel_bounds(canvas, polygon, 0.0) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            if contains(polygon, sample(x, y)) {
                canvas.put_pixel(x, y, color.to_rgba());
            }
        }
    }
}

/// Outline `polygon` with a stroke of `width` pixels lying along the inside
/// of its edges.
fn stroke_polygon(canvas: &mut RgbaImage, polygon: &[Point], width: u32, color: Color) {
    let Some((xs, ys)) = pixel_bounds(canvas, polygon, 1.0) else {
        return;
    };
    let width = f64::from(width);

    for y in ys {
        for x in xs.clone() {
            let p = sample(x, y);
            let d = distance_to_outline(polygon, p);
            if d <= 0.5 || (d < width && contains(polygon, p)) {
                canvas.put_pixel(x, y, color.to_rgba());
            }
        }
    }
}

fn sample(x: u32, y: u32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Pixel ranges covering `polygon` plus `margin`, clipped to the canvas.
fn pixel_bounds(
    canvas: &RgbaImage,
    polygon: &[Point],
    margin: f64,
) -> Option<(Range<u32>, Range<u32>)> {
    let first = polygon.first()?;
    let (mut min, mut max) = (*first, *first);
    for p in polygon {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }

    // Float to int casts saturate, so negative bounds clamp to zero.
    let clip = |lo: f64, hi: f64, limit: u32| {
        let start = (lo - margin).floor() as u32;
        let end = ((hi + margin).ceil() as u32).saturating_add(1).min(limit);
        start.min(end)..end
    };

    Some((
        clip(min.x, max.x, canvas.width()),
        clip(min.y, max.y, canvas.height()),
    ))
}

/// Even-odd point-in-polygon test.
fn contains(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);

    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}

fn distance_to_outline(polygon: &[Point], p: Point) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| distance_to_segment(p, polygon[i], polygon[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0)
    };

    (p.x - (a.x + t * dx)).hypot(p.y - (a.y + t * dy))
}
