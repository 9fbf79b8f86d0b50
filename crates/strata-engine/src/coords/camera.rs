use super::{Vec2, Vec3};

/// 2D camera snapshot: `target` is the world point shown at `offset` on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
    pub target: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    #[inline]
    pub const fn new(offset: Vec2, target: Vec2, rotation: f32, zoom: f32) -> Self {
        Self { offset, target, rotation, zoom }
    }

    /// Camera used to draw one layer.
    ///
    /// `target' = target * parallax + scroll`, `offset' = offset + scroll`;
    /// rotation and zoom are inherited unchanged.
    #[inline]
    pub fn for_layer(self, parallax: Vec2, scroll: Vec2) -> Self {
        Self {
            offset: self.offset + scroll,
            target: self.target.scale(parallax) + scroll,
            ..self
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::zero(), 0.0, 1.0)
    }
}

/// 3D camera snapshot, forwarded verbatim to the host's 3D block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::zero(),
            up: Vec3::up(),
            fovy: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_camera_applies_parallax_then_scroll() {
        let base = Camera2D::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 50.0), 15.0, 2.0);
        let cam = base.for_layer(Vec2::new(0.5, 1.0), Vec2::new(10.0, 0.0));

        assert_eq!(cam.target, Vec2::new(60.0, 50.0));
        assert_eq!(cam.offset, Vec2::new(410.0, 300.0));
        assert_eq!(cam.rotation, 15.0);
        assert_eq!(cam.zoom, 2.0);
    }

    #[test]
    fn identity_layer_keeps_base_camera() {
        let base = Camera2D::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 0.0, 1.0);
        assert_eq!(base.for_layer(Vec2::one(), Vec2::zero()), base);
    }
}
