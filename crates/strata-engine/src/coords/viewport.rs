use super::Vec2;

/// Screen size in logical pixels.
///
/// The compositor never queries the window itself; hosts hand this in so
/// view-dependent policies (culling) stay deterministic.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Half the screen size, the distance from the camera target to each edge at zoom 1.
    #[inline]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
