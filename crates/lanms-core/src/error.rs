//! Geometry errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("a quadrilateral needs exactly 4 vertices, got {0}")]
    VertexCount(usize),
}
