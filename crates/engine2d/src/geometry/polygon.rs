//! Regular polygon approximation of circles

use std::f32::consts::TAU;

use super::{GeometryError, GeometryResult};
use crate::foundation::math::{rotate_2d, Vec2};

/// Approximate a circle with a regular polygon
///
/// Returns `segments` points on the circle of the given `radius` around
/// `center`. The first point sits at `start_angle` radians (counter-clockwise
/// from +X) and the following points advance counter-clockwise by
/// `2π / segments`.
///
/// Each point is computed from its own angle instead of rotating the previous
/// point, so rounding error does not build up for large segment counts.
///
/// # Errors
/// [`GeometryError::InvalidParameter`] if `radius <= 0` or `segments < 3`.
///
/// # Example
/// ```rust
/// use engine2d::foundation::math::Vec2;
/// use engine2d::geometry::circle_to_polygon;
///
/// let square = circle_to_polygon(Vec2::zeros(), 1.0, 4, 0.0).unwrap();
/// assert_eq!(square.len(), 4);
/// ```
pub fn circle_to_polygon(
    center: Vec2,
    radius: f32,
    segments: usize,
    start_angle: f32,
) -> GeometryResult<Vec<Vec2>> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(GeometryError::InvalidParameter(format!(
            "radius must be > 0, got {radius}"
        )));
    }
    if segments < 3 {
        return Err(GeometryError::InvalidParameter(format!(
            "segments must be >= 3, got {segments}"
        )));
    }

    let step = TAU / segments as f32;
    let start = Vec2::new(radius, 0.0);

    let vertices = (0..segments)
        .map(|index| center + rotate_2d(start, start_angle + step * index as f32))
        .collect();

    Ok(vertices)
}
