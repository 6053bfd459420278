//! LA-NMS core geometry
//!
//! Point, quadrilateral and polygon primitives shared by the suppression passes.

pub mod error;
pub mod geometry;
pub mod quad;

pub use error::GeometryError;
pub use geometry::{intersection_area, iou, Point};
pub use quad::Quad;
