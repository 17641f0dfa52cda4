//! # 2D Camera System
//!
//! Orthographic camera for 2D rendering with a lazily rebuilt projection
//! matrix.
//!
//! ## Design Principles
//! - **Lazy rebuild**: setters only mark the matrix dirty; the next read rebuilds it once
//! - **Library-agnostic**: No graphics API types in the camera math
//! - **Fail fast**: invalid zoom or viewport sizes are rejected before any state changes

use crate::foundation::math::{Mat4, Mat4Ext, Vec2};
use crate::render::{RenderError, RenderResult};

/// Near clip value used by every [`Camera2D`]
///
/// Numerically greater than [`CAMERA_FAR`]. The renderer's depth convention
/// relies on this ordering, so it must not be "fixed" in isolation.
pub const CAMERA_NEAR: f32 = 2.0;

/// Far clip value used by every [`Camera2D`]
pub const CAMERA_FAR: f32 = -2.0;

/// World-space rectangle visible through a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Left edge (x)
    pub left: f32,
    /// Right edge (x)
    pub right: f32,
    /// Top edge (y), the larger y value
    pub top: f32,
    /// Bottom edge (y), the smaller y value
    pub bottom: f32,
}

impl ViewBounds {
    /// Visible width in world units
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Visible height in world units
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Camera based on an orthographic projection
///
/// Owns a cached projection matrix plus a dirty flag. Every mutator sets the
/// flag and every read of [`projection_matrix`](Self::projection_matrix)
/// checks it, rebuilding synchronously when needed. Any number of setter
/// calls between two reads therefore cost exactly one rebuild.
///
/// # Coordinate System
/// World y grows downwards on screen: the larger y edge of the view is mapped
/// to the bottom of clip space. Text layout relies on this, since it advances
/// lines towards +y.
///
/// When `centered` is set, the camera position is the center of the view;
/// otherwise it is the corner with the smallest coordinates.
#[derive(Debug, Clone)]
pub struct Camera2D {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    zoom: f32,
    centered: bool,
    near: f32,
    far: f32,
    projection_matrix: Mat4,
    matrix_dirty: bool,
    rebuilds: u64,
}

impl Camera2D {
    /// Create a new orthographic camera
    ///
    /// The projection matrix is built immediately, so the first read does not
    /// trigger a rebuild.
    ///
    /// # Arguments
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    /// * `zoom` - Zoom factor; 2.0 shows half the world extent of 1.0
    /// * `centered` - Whether the camera position is the view center
    ///
    /// # Errors
    /// [`RenderError::InvalidParameter`] if a dimension is zero or `zoom` is
    /// not a finite positive number.
    ///
    /// # Example
    /// ```rust
    /// use engine2d::render::Camera2D;
    ///
    /// let mut camera = Camera2D::new(800, 600, 1.0, true).unwrap();
    /// camera.set_position(100.0, 50.0);
    /// let projection = camera.projection_matrix();
    /// ```
    pub fn new(width: u32, height: u32, zoom: f32, centered: bool) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidParameter(format!(
                "camera viewport must be non-empty, got {width}x{height}"
            )));
        }
        validate_zoom(zoom)?;

        let mut camera = Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            zoom,
            centered,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            projection_matrix: Mat4::identity(),
            matrix_dirty: true,
            rebuilds: 0,
        };
        camera.rebuild_matrix();

        log::debug!(
            "Camera2D created: {}x{}, zoom {}, centered {}",
            width, height, zoom, centered
        );
        Ok(camera)
    }

    /// Get the projection matrix, rebuilding it first if it is stale
    pub fn projection_matrix(&mut self) -> Mat4 {
        if self.matrix_dirty {
            self.rebuild_matrix();
        }
        self.projection_matrix
    }

    /// Set the camera position in world units
    ///
    /// For a centered camera this moves the view center. The matrix is not
    /// rebuilt until the next [`projection_matrix`](Self::projection_matrix).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.matrix_dirty = true;
        log::trace!("Camera2D position updated to: ({}, {})", x, y);
    }

    /// Set the zoom factor
    ///
    /// # Errors
    /// [`RenderError::InvalidParameter`] if `zoom` is not a finite positive
    /// number. The camera is left untouched in that case.
    pub fn set_zoom(&mut self, zoom: f32) -> RenderResult<()> {
        validate_zoom(zoom)?;
        self.zoom = zoom;
        self.matrix_dirty = true;
        log::trace!("Camera2D zoom updated to: {}", zoom);
        Ok(())
    }

    /// World-space rectangle currently visible through the camera
    pub fn view_bounds(&self) -> ViewBounds {
        let (mut left, mut right, mut top, mut bottom) = if self.centered {
            let half_width = self.width / 2.0 / self.zoom;
            let half_height = self.height / 2.0 / self.zoom;
            (-half_width, half_width, half_height, -half_height)
        } else {
            (0.0, self.width / self.zoom, self.height / self.zoom, 0.0)
        };

        left += self.x;
        right += self.x;
        top += self.y;
        bottom += self.y;

        ViewBounds { left, right, top, bottom }
    }

    /// Current camera position
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Viewport width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Viewport height in pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether the position is the view center
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Near clip value
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip value
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Number of times the projection matrix has been built
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn rebuild_matrix(&mut self) {
        let bounds = self.view_bounds();

        // top and bottom go into the bottom/top slots: y-down screen space
        self.projection_matrix = Mat4::orthographic(
            bounds.left,
            bounds.right,
            bounds.top,
            bounds.bottom,
            self.near,
            self.far,
        );
        self.matrix_dirty = false;
        self.rebuilds += 1;

        log::trace!("Camera2D matrix rebuilt for bounds {:?}", bounds);
    }
}

fn validate_zoom(zoom: f32) -> RenderResult<()> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidParameter(format!(
            "camera zoom must be a finite value > 0, got {zoom}"
        )))
    }
}

/// GPU-side uniform data for the camera
///
/// Column-major, as shader `mat4` uniforms expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraUniform {
    /// Projection matrix columns
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Capture the camera's current projection, rebuilding it if needed
    pub fn from_camera(camera: &mut Camera2D) -> Self {
        Self {
            projection: camera.projection_matrix().into(),
        }
    }

    /// Raw bytes ready for a uniform buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.projection[..])
    }
}
