//! # 2D Geometry Utilities
//!
//! Stateless helpers producing approximate shapes and extents:
//!
//! - [`circle_to_polygon`] approximates a circle with a regular polygon
//! - [`bounding_box`] computes the axis-aligned bounds of a point set
//!
//! All functions validate their input before computing anything, so an error
//! never comes with partial output.

pub mod bounds;
pub mod polygon;

pub use bounds::{bounding_box, BoundingBox};
pub use polygon::circle_to_polygon;

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur in geometry utilities
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A caller-supplied parameter is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Bounds were requested for an empty set of points
    #[error("Cannot compute bounds of an empty point set")]
    EmptyPointSet,
}
