use std::collections::HashMap;

use crate::compose::Visibility;
use crate::coords::{Camera2D, Rect, Vec2, Viewport};

/// View-culling policy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CullConfig {
    /// When `false` every sprite is reported visible.
    pub enabled: bool,
    /// Extra world units kept around the view on every side.
    pub margin: f32,
    pub screen: Viewport,
}

impl Default for CullConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            margin: 64.0,
            screen: Viewport::new(800.0, 450.0),
        }
    }
}

/// World-space placement of a sprite, enough to compute its bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteBounds {
    pub position: Vec2,
    /// Pivot in unscaled sprite pixels.
    pub origin: Vec2,
    pub scale: Vec2,
    /// Unscaled frame (or texture) size.
    pub size: Vec2,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl SpriteBounds {
    /// Size assumed for sprites whose texture size is unknown.
    pub const FALLBACK_SIZE: Vec2 = Vec2::new(32.0, 32.0);

    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            origin: Vec2::zero(),
            scale: Vec2::one(),
            size,
            flip_x: false,
            flip_y: false,
        }
    }

    /// World rectangle covered by the sprite. Flips produce negative extents.
    pub fn world_rect(&self) -> Rect {
        let top_left = self.position - self.origin.scale(self.scale);
        let mut extent = if self.size == Vec2::zero() {
            Self::FALLBACK_SIZE
        } else {
            self.size.scale(self.scale)
        };
        if self.flip_x {
            extent.x = -extent.x;
        }
        if self.flip_y {
            extent.y = -extent.y;
        }
        Rect::from_origin_size(top_left, extent)
    }
}

/// Visibility predicate backed by per-sprite bounds and the base 2D camera.
///
/// Unknown sprites are always visible: culling only ever removes draws it
/// can prove are off-screen.
#[derive(Debug, Default)]
pub struct ViewCuller {
    config: CullConfig,
    camera: Camera2D,
    sprites: HashMap<String, SpriteBounds>,
}

impl ViewCuller {
    pub fn new(config: CullConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &CullConfig {
        &self.config
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    #[inline]
    pub fn set_margin(&mut self, margin: f32) {
        self.config.margin = margin;
    }

    #[inline]
    pub fn set_screen(&mut self, screen: Viewport) {
        self.config.screen = screen;
    }

    /// Camera snapshot the view rectangle is computed from; update once per frame.
    #[inline]
    pub fn set_camera(&mut self, camera: Camera2D) {
        self.camera = camera;
    }

    pub fn set_sprite(&mut self, id: &str, bounds: SpriteBounds) {
        self.sprites.insert(id.to_owned(), bounds);
    }

    pub fn remove_sprite(&mut self, id: &str) -> Option<SpriteBounds> {
        self.sprites.remove(id)
    }

    /// World rectangle considered on-screen, margin included.
    pub fn view_rect(&self) -> Rect {
        let zoom = if self.camera.zoom > 0.0 { self.camera.zoom } else { 1.0 };
        let margin = Vec2::new(self.config.margin, self.config.margin);
        let half = self.config.screen.half_extents() * (1.0 / zoom) + margin;
        Rect::from_center(self.camera.target, half)
    }
}

impl Visibility for ViewCuller {
    fn is_visible(&self, sprite: &str) -> bool {
        // No usable screen size, no view rectangle to test against.
        if !self.config.enabled || !self.config.screen.is_valid() {
            return true;
        }
        match self.sprites.get(sprite) {
            Some(bounds) => bounds.world_rect().overlaps(self.view_rect()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn culler() -> ViewCuller {
        let mut c = ViewCuller::new(CullConfig {
            enabled: true,
            margin: 0.0,
            screen: Viewport::new(200.0, 100.0),
        });
        c.set_camera(Camera2D::new(Vec2::zero(), Vec2::new(0.0, 0.0), 0.0, 1.0));
        c
    }

    #[test]
    fn view_rect_scales_with_zoom_and_margin() {
        let mut c = culler();
        c.set_margin(10.0);
        c.set_camera(Camera2D::new(Vec2::zero(), Vec2::new(50.0, 50.0), 0.0, 2.0));
        let view = c.view_rect();
        assert_eq!(view.min(), Vec2::new(50.0 - 60.0, 50.0 - 35.0));
        assert_eq!(view.max(), Vec2::new(50.0 + 60.0, 50.0 + 35.0));
    }

    #[test]
    fn disabled_culler_sees_everything() {
        let mut c = culler();
        c.set_sprite("far", SpriteBounds::new(Vec2::new(10_000.0, 0.0), Vec2::new(8.0, 8.0)));
        c.set_enabled(false);
        assert!(c.is_visible("far"));
    }

    #[test]
    fn off_screen_sprite_is_culled() {
        let mut c = culler();
        c.set_sprite("near", SpriteBounds::new(Vec2::new(10.0, 10.0), Vec2::new(8.0, 8.0)));
        c.set_sprite("far", SpriteBounds::new(Vec2::new(500.0, 0.0), Vec2::new(8.0, 8.0)));
        assert!(c.is_visible("near"));
        assert!(!c.is_visible("far"));
    }

    #[test]
    fn unknown_sprite_is_visible() {
        assert!(culler().is_visible("ghost"));
    }

    #[test]
    fn removed_sprite_is_no_longer_culled() {
        let mut c = culler();
        c.set_sprite("far", SpriteBounds::new(Vec2::new(500.0, 0.0), Vec2::new(8.0, 8.0)));
        assert!(!c.is_visible("far"));
        assert!(c.remove_sprite("far").is_some());
        assert!(c.remove_sprite("far").is_none());
        assert!(c.is_visible("far"));
    }

    #[test]
    fn degenerate_screen_disables_culling() {
        let mut c = culler();
        c.set_sprite("far", SpriteBounds::new(Vec2::new(500.0, 0.0), Vec2::new(8.0, 8.0)));
        c.set_screen(Viewport::new(0.0, 100.0));
        assert!(c.is_visible("far"));
        c.set_screen(Viewport::new(f32::NAN, 100.0));
        assert!(c.is_visible("far"));
        c.set_screen(Viewport::new(200.0, 100.0));
        assert!(!c.is_visible("far"));
    }

    #[test]
    fn flipped_sprite_extends_backwards() {
        let mut c = culler();
        // Spans [110, 130] unflipped, right of the view edge at x = 100.
        let mut b = SpriteBounds::new(Vec2::new(110.0, 0.0), Vec2::new(20.0, 10.0));
        c.set_sprite("s", b);
        assert!(!c.is_visible("s"));
        b.flip_x = true;
        c.set_sprite("s", b);
        assert!(c.is_visible("s"));
    }

    #[test]
    fn zero_size_uses_fallback_extent() {
        let b = SpriteBounds::new(Vec2::new(5.0, 5.0), Vec2::zero());
        assert_eq!(b.world_rect().size, SpriteBounds::FALLBACK_SIZE);
    }
}
