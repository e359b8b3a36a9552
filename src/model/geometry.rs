//! Screen geometry in Cocoa coordinates (origin bottom-left).

/// A point in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Frame origin that centres a ring of `diameter` on `cursor`.
pub fn ring_origin(cursor: Point, diameter: f64) -> Point {
    let radius = diameter / 2.0;
    cursor.offset(-radius, -radius)
}

/// Centre of a ring of `diameter` whose frame starts at `origin`.
pub fn ring_center(origin: Point, diameter: f64) -> Point {
    let radius = diameter / 2.0;
    origin.offset(radius, radius)
}

/// Square the ring is stroked in, relative to its own frame: inset by half
/// the line width so the stroke is not clipped by the view bounds.
/// Returns the square's origin and side length.
pub fn stroke_square(diameter: f64, line_width: f64) -> (Point, f64) {
    let inset = line_width / 2.0;
    (Point::new(inset, inset), (diameter - line_width).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_offset_by_half_the_diameter() {
        let origin = ring_origin(Point::new(500.0, 400.0), 32.0);
        assert_eq!(origin, Point::new(484.0, 384.0));
    }

    #[test]
    fn stroke_square_stays_inside_frame() {
        let (origin, side) = stroke_square(32.0, 1.5);
        assert_eq!(origin, Point::new(0.75, 0.75));
        assert_eq!(side, 30.5);
        assert_eq!(origin.x + side + 0.75, 32.0);
    }

    #[test]
    fn stroke_square_never_negative() {
        let (_, side) = stroke_square(2.0, 4.0);
        assert_eq!(side, 0.0);
    }

    #[test]
    fn center_inverts_origin() {
        let cursor = Point::new(-120.5, 33.25);
        let origin = ring_origin(cursor, 32.0);
        assert_eq!(ring_center(origin, 32.0), cursor);
    }
}
