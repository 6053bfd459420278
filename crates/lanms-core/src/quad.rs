//! Quadrilateral detection geometry
//!
//! A [`Quad`] is an ordered set of exactly four vertices. Vertex `i` of one quad is assumed to
//! correspond to vertex `i` of another, so merges average vertices index by index.

use crate::error::GeometryError;
use crate::geometry::polygon::{self, ConvexPolygon};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Relative area tolerance: a quad is degenerate when `|area| <= AREA_EPSILON * extent²`,
/// where `extent` is the larger side of its bounding box
pub const AREA_EPSILON: f32 = 1e-6;

/// Four-vertex planar polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quad {
    points: [Point; 4],
}

impl Quad {
    /// Create a quad from its vertices, in order
    pub const fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle from two corners
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new([
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ])
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn vertex(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Topmost extent: smallest y among the vertices
    pub fn min_y(&self) -> f32 {
        self.points
            .iter()
            .skip(1)
            .fold(self.points[0].y, |min, p| if p.y < min { p.y } else { min })
    }

    /// Signed shoelace area
    pub fn signed_area(&self) -> f32 {
        polygon::signed_area(&self.points)
    }

    /// Absolute area, 0 for degenerate quads
    pub fn area(&self) -> f32 {
        if self.is_degenerate() { 0.0 } else { self.signed_area().abs() }
    }

    /// True for near-zero area, non-finite coordinates or self-intersecting (bow-tie) shapes
    pub fn is_degenerate(&self) -> bool {
        if !self.points.iter().all(Point::is_finite) {
            return true;
        }
        // NaN-safe: also rejects a NaN area
        let extent = self.extent();
        if !(self.signed_area().abs() > AREA_EPSILON * extent * extent) {
            return true;
        }
        self.is_self_intersecting()
    }

    /// Larger side of the axis-aligned bounding box
    pub fn extent(&self) -> f32 {
        let [first, rest @ ..] = self.points;
        let (min, max) = rest.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        (max.x - min.x).max(max.y - min.y)
    }

    /// Whether opposite edges cross each other
    pub fn is_self_intersecting(&self) -> bool {
        let [a, b, c, d] = self.points;
        segments_cross(a, b, c, d) || segments_cross(b, c, d, a)
    }

    /// Convex when every turn has the same direction; collinear turns are allowed
    pub fn is_convex(&self) -> bool {
        let mut sign = 0.0f32;
        for i in 0..4 {
            let turn = self.turn(i);
            if turn == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Split into positively oriented convex pieces whose union is the quad
    ///
    /// A convex quad yields itself. A concave quad is cut along the diagonal through its
    /// reflex vertex into two triangles.
    pub fn convex_pieces(&self) -> Vec<ConvexPolygon> {
        if self.is_convex() {
            return vec![ConvexPolygon::oriented(&self.points)];
        }

        let orientation = self.signed_area();
        let reflex = (0..4)
            .find(|&i| self.turn(i) * orientation < 0.0)
            .unwrap_or(0);
        let p = |offset: usize| self.points[(reflex + offset) % 4];

        vec![
            ConvexPolygon::oriented(&[p(0), p(1), p(2)]),
            ConvexPolygon::oriented(&[p(0), p(2), p(3)]),
        ]
    }

    /// Per-vertex weighted average of two quads
    ///
    /// Falls back to the plain mean when the weights cancel out.
    pub fn weighted_average(&self, weight: f32, other: &Quad, other_weight: f32) -> Quad {
        let total = weight + other_weight;
        let (w1, w2, total) = if total == 0.0 {
            (1.0, 1.0, 2.0)
        } else {
            (weight, other_weight, total)
        };

        let mut points = [Point::default(); 4];
        for (i, point) in points.iter_mut().enumerate() {
            let a = self.points[i];
            let b = other.points[i];
            *point = Point::new(
                (a.x * w1 + b.x * w2) / total,
                (a.y * w1 + b.y * w2) / total,
            );
        }
        Quad::new(points)
    }

    /// Rotate every vertex about the origin
    pub fn rotate(&self, angle: f32) -> Quad {
        Quad::new(self.points.map(|p| p.rotate(angle)))
    }

    /// Translate every vertex
    pub fn translate(&self, dx: f32, dy: f32) -> Quad {
        Quad::new(self.points.map(|p| Point::new(p.x + dx, p.y + dy)))
    }

    /// Cross product of the edges meeting at vertex `i`
    fn turn(&self, i: usize) -> f32 {
        let prev = self.points[(i + 3) % 4];
        let cur = self.points[i];
        let next = self.points[(i + 1) % 4];
        (cur - prev).cross(next - cur)
    }
}

/// Proper crossing of segments `a-b` and `c-d` (touching endpoints do not count)
fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = (b - a).cross(c - a);
    let d2 = (b - a).cross(d - a);
    let d3 = (d - c).cross(a - c);
    let d4 = (d - c).cross(b - c);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

impl From<[Point; 4]> for Quad {
    fn from(points: [Point; 4]) -> Self {
        Self::new(points)
    }
}

impl From<[[f32; 2]; 4]> for Quad {
    fn from(points: [[f32; 2]; 4]) -> Self {
        Self::new(points.map(Point::from))
    }
}

impl From<Quad> for [[f32; 2]; 4] {
    fn from(quad: Quad) -> Self {
        quad.points.map(<[f32; 2]>::from)
    }
}

impl TryFrom<&[Point]> for Quad {
    type Error = GeometryError;

    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        let points: [Point; 4] = points
            .try_into()
            .map_err(|_| GeometryError::VertexCount(points.len()))?;
        Ok(Self::new(points))
    }
}

impl TryFrom<Vec<Point>> for Quad {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::try_from(points.as_slice())
    }
}
