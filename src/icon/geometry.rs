/// A point in canvas space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Bolt outline as fractions of the padded drawing area, starting at the
/// top vertex and ending on the inner notch of the lower half.
const BOLT_FRACTIONS: [(f64, f64); 6] = [
    (0.6, 0.0),
    (0.2, 0.45),
    (0.45, 0.45),
    (0.4, 1.0),
    (0.8, 0.55),
    (0.55, 0.55),
];

/// Padding around the bolt for a square icon of `size` pixels.
pub fn bolt_padding(size: u32) -> u32 {
    size / 6
}

/// Compute the six vertices of the lightning bolt for a `width` x `height`
/// canvas, leaving `padding` pixels free on every side.
///
/// The polygon is closed implicitly. A canvas no larger than twice the
/// padding yields a collapsed (zero-area or inverted) shape rather than an
/// error.
pub fn bolt_polygon(width: u32, height: u32, padding: u32) -> [Point; 6] {
    let pad = f64::from(padding);
    let w = f64::from(width) - 2.0 * pad;
    let h = f64::from(height) - 2.0 * pad;

    BOLT_FRACTIONS.map(|(fx, fy)| Point::new(pad + w * fx, pad + h * fy))
}
