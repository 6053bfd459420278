//! Polygon area and convex clipping
//!
//! Clipping follows Sutherland–Hodgman: the subject polygon is clipped against every edge
//! half-plane of a convex clip polygon in turn. Clip polygons are expected in positive
//! (counter-clockwise in a y-up frame) orientation; use [`ConvexPolygon::oriented`] to
//! normalize arbitrary input.

use super::point::Point;

/// Upper bound on vertices produced while clipping two convex quadrilaterals
pub const MAX_CLIP_VERTICES: usize = 16;

/// Signed shoelace area, positive for counter-clockwise (y-up) winding
pub fn signed_area(points: &[Point]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let origin = points[0];
    let mut twice_area = 0.0;
    for window in points[1..].windows(2) {
        twice_area += (window[0] - origin).cross(window[1] - origin);
    }
    twice_area / 2.0
}

/// Absolute shoelace area
pub fn polygon_area(points: &[Point]) -> f32 {
    signed_area(points).abs()
}

/// Intersection of the segment `p1 -> p2` with the infinite line through `v1 -> v2`
///
/// Returns `None` when the segment is parallel to the line.
pub fn compute_intersection(p1: Point, p2: Point, v1: Point, v2: Point) -> Option<Point> {
    let edge = v2 - v1;
    let dir = p2 - p1;
    let denom = edge.cross(dir);
    let scale = (edge.x.abs() + edge.y.abs()) * (dir.x.abs() + dir.y.abs());
    if denom.abs() <= f32::EPSILON * scale {
        return None;
    }

    let t = edge.cross(v1 - p1) / denom;
    Some(p1 + dir * t)
}

/// Whether `p` lies strictly inside (left of) the directed edge `v1 -> v2`
#[inline]
pub fn inside_edge(p: Point, v1: Point, v2: Point) -> bool {
    (v2 - v1).cross(p - v1) > 0.0
}

/// Fixed-capacity convex polygon produced by clipping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexPolygon {
    points: [Point; MAX_CLIP_VERTICES],
    len: usize,
}

impl ConvexPolygon {
    /// Create an empty polygon
    pub const fn empty() -> Self {
        Self {
            points: [Point::new(0.0, 0.0); MAX_CLIP_VERTICES],
            len: 0,
        }
    }

    /// Build from a slice, keeping the given vertex order
    pub fn from_points(points: &[Point]) -> Self {
        let mut polygon = Self::empty();
        for &p in points {
            polygon.push(p);
        }
        polygon
    }

    /// Build from a slice, reversing the winding if needed so the signed area is positive
    pub fn oriented(points: &[Point]) -> Self {
        if signed_area(points) < 0.0 {
            let mut polygon = Self::empty();
            for &p in points.iter().rev() {
                polygon.push(p);
            }
            polygon
        } else {
            Self::from_points(points)
        }
    }

    /// Append a vertex; vertices past capacity are dropped
    pub fn push(&mut self, point: Point) {
        debug_assert!(self.len < MAX_CLIP_VERTICES, "clip buffer overflow");
        if self.len < MAX_CLIP_VERTICES {
            self.points[self.len] = point;
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points[..self.len]
    }

    /// Absolute area, 0 for fewer than 3 vertices
    pub fn area(&self) -> f32 {
        polygon_area(self.as_slice())
    }
}

impl Default for ConvexPolygon {
    fn default() -> Self {
        Self::empty()
    }
}

/// Clip `subject` against every edge of the convex, positively oriented `clip` polygon
pub fn polygon_intersection(subject: &[Point], clip: &[Point]) -> ConvexPolygon {
    let mut output = ConvexPolygon::from_points(subject);
    if clip.len() < 3 {
        output.clear();
        return output;
    }

    for (i, &v1) in clip.iter().enumerate() {
        let v2 = clip[(i + 1) % clip.len()];
        let input = output;
        output.clear();

        let points = input.as_slice();
        for (k, &current) in points.iter().enumerate() {
            let prev = points[(k + points.len() - 1) % points.len()];
            let current_inside = inside_edge(current, v1, v2);
            let prev_inside = inside_edge(prev, v1, v2);

            if current_inside {
                if !prev_inside {
                    output.push(compute_intersection(prev, current, v1, v2).unwrap_or(prev));
                }
                output.push(current);
            } else if prev_inside {
                output.push(compute_intersection(prev, current, v1, v2).unwrap_or(current));
            }
        }

        if output.is_empty() {
            break;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f32, y0: f32, side: f32) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ]
    }

    #[test]
    fn test_area_triangle() {
        let p = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(polygon_area(&p), 50.0);
    }

    #[test]
    fn test_area_square_negative_coordinates() {
        assert_eq!(polygon_area(&square(-10.0, -10.0, 20.0)), 400.0);
    }

    #[test]
    fn test_area_octagon() {
        let p = [
            Point::new(50.0, 0.0),
            Point::new(150.0, 0.0),
            Point::new(200.0, 25.0),
            Point::new(200.0, 75.0),
            Point::new(150.0, 100.0),
            Point::new(50.0, 100.0),
            Point::new(0.0, 75.0),
            Point::new(0.0, 25.0),
        ];
        let expected = 200.0 * 100.0 - 4.0 * (50.0 * 25.0 / 2.0);
        assert_eq!(polygon_area(&p), expected);
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square(0.0, 0.0, 10.0);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!(signed_area(&ccw) > 0.0);
        assert!(signed_area(&cw) < 0.0);
        assert_eq!(signed_area(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_intersection_vertical_line() {
        let i = compute_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, 20.0),
        )
        .unwrap();
        assert_relative_eq!(i.x, 20.0);
        assert_relative_eq!(i.y, 0.0);
    }

    #[test]
    fn test_intersection_crossing_edge() {
        let i = compute_intersection(
            Point::new(0.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
        )
        .unwrap();
        assert_relative_eq!(i.x, 10.0);
        assert_relative_eq!(i.y, 10.0);
    }

    #[test]
    fn test_intersection_parallel() {
        let i = compute_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        );
        assert!(i.is_none());
    }

    #[test]
    fn test_inside_edge() {
        let v1 = Point::new(0.0, 10.0);
        let v2 = Point::new(10.0, 10.0);
        assert!(!inside_edge(Point::new(5.0, 0.0), v1, v2));
        assert!(inside_edge(Point::new(5.0, 15.0), v1, v2));
        assert!(inside_edge(Point::new(5.0, 0.0), v2, v1));
        assert!(!inside_edge(Point::new(5.0, 15.0), v2, v1));

        // Diagonal edge
        let v1 = Point::new(0.0, 10.0);
        let v2 = Point::new(10.0, 0.0);
        assert!(!inside_edge(Point::new(0.0, 0.0), v1, v2));
        assert!(inside_edge(Point::new(10.0, 10.0), v1, v2));
    }

    #[test]
    fn test_clip_square_with_itself() {
        let p = square(0.0, 0.0, 10.0);
        let clipped = polygon_intersection(&p, &p);
        assert_eq!(clipped.len(), 4);
        assert_relative_eq!(clipped.area(), 100.0);

        // Same vertices, possibly rotated in order
        for v in clipped.as_slice() {
            assert!(p.iter().any(|q| (q.x - v.x).abs() < 1e-4 && (q.y - v.y).abs() < 1e-4));
        }
    }

    #[test]
    fn test_clip_square_on_rotated_square() {
        let p1 = square(100.0, 100.0, 100.0);
        let p2 = [
            Point::new(150.0, 79.0),
            Point::new(221.0, 150.0),
            Point::new(150.0, 221.0),
            Point::new(79.0, 150.0),
        ];
        let clipped = polygon_intersection(&p1, ConvexPolygon::oriented(&p2).as_slice());
        assert_eq!(clipped.len(), 8);
    }

    #[test]
    fn test_clip_disjoint_is_empty() {
        let clipped = polygon_intersection(&square(0.0, 0.0, 10.0), &square(20.0, 0.0, 10.0));
        assert!(clipped.len() < 3);
        assert_eq!(clipped.area(), 0.0);
    }

    #[test]
    fn test_oriented_reverses_clockwise() {
        let cw: Vec<_> = square(0.0, 0.0, 10.0).into_iter().rev().collect();
        let oriented = ConvexPolygon::oriented(&cw);
        assert!(signed_area(oriented.as_slice()) > 0.0);
        assert_eq!(oriented.len(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clip buffer overflow")]
    fn test_push_past_capacity_panics_in_debug() {
        let mut polygon = ConvexPolygon::empty();
        for i in 0..=MAX_CLIP_VERTICES {
            polygon.push(Point::new(i as f32, 0.0));
        }
    }
}
