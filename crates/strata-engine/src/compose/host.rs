use crate::coords::{Camera2D, Camera3D, ColorRgba};
use crate::drawable::DrawableStore;
use crate::scene::{RenderCmd, ZIndex};

/// Executes one queued draw call on the host renderer.
pub trait DrawInvoker {
    /// Errors are logged and skipped by the compositor; one bad draw never aborts a frame.
    fn invoke(&mut self, cmd: &RenderCmd) -> anyhow::Result<()>;
}

/// Immediate-mode renderer the compositor drives once per frame.
///
/// Calls arrive balanced: every `begin_*` is matched by its `end_*` before the
/// next block opens.
pub trait FrameBackend: DrawInvoker {
    fn begin_frame(&mut self);
    fn clear_background(&mut self, color: ColorRgba);
    fn begin_mode_2d(&mut self, camera: &Camera2D);
    fn end_mode_2d(&mut self);
    fn begin_mode_3d(&mut self, camera: &Camera3D);
    fn end_mode_3d(&mut self);
    fn end_frame(&mut self);
}

/// Per-sprite view test. Must be side-effect free.
pub trait Visibility {
    fn is_visible(&self, sprite: &str) -> bool;
}

impl<F> Visibility for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_visible(&self, sprite: &str) -> bool {
        self(sprite)
    }
}

/// Visibility predicate that never culls.
#[derive(Debug, Copy, Clone, Default)]
pub struct AlwaysVisible;

impl Visibility for AlwaysVisible {
    #[inline]
    fn is_visible(&self, _sprite: &str) -> bool {
        true
    }
}

/// Texture a batchable command draws with; `""` when unknown.
///
/// Pending batch entries are grouped by this id.
pub trait BatchTextures {
    fn batch_texture<'a>(&'a self, cmd: &'a RenderCmd) -> &'a str;
}

/// Layer id and z-index a 2D command sorts under; `("", 0)` when not layer-aware.
pub trait LayerResolver {
    fn resolve<'a>(&'a self, cmd: &RenderCmd) -> (&'a str, ZIndex);
}

impl LayerResolver for DrawableStore {
    #[inline]
    fn resolve<'a>(&'a self, cmd: &RenderCmd) -> (&'a str, ZIndex) {
        DrawableStore::resolve(self, cmd)
    }
}
