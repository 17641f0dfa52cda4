//! Axis-aligned bounding boxes

use super::{GeometryError, GeometryResult};
use crate::foundation::math::Vec2;

/// Axis-aligned bounding box of a 2D point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Componentwise minimum corner
    pub min: Vec2,
    /// Componentwise maximum corner
    pub max: Vec2,
}

impl BoundingBox {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the edge of the box
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Compute the axis-aligned bounding box of `points`
///
/// Every point is visited once and each of min-X, min-Y, max-X and max-Y is
/// tracked independently.
///
/// # Errors
/// [`GeometryError::EmptyPointSet`] when `points` is empty.
pub fn bounding_box(points: &[Vec2]) -> GeometryResult<BoundingBox> {
    let (first, rest) = points.split_first().ok_or(GeometryError::EmptyPointSet)?;

    let mut min = *first;
    let mut max = *first;
    for point in rest {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }

    Ok(BoundingBox { min, max })
}
