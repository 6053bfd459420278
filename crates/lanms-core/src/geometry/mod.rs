//! Planar geometry primitives
//!
//! Pure functions over immutable points and polygons: shoelace area, Sutherland–Hodgman
//! clipping and intersection-over-union of quadrilaterals.

pub mod iou;
pub mod point;
pub mod polygon;

pub use iou::{intersection_area, iou};
pub use point::Point;
pub use polygon::{
    compute_intersection, inside_edge, polygon_area, polygon_intersection, signed_area,
    ConvexPolygon, MAX_CLIP_VERTICES,
};
