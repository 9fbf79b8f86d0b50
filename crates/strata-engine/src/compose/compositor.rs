use crate::coords::{Camera2D, Camera3D, ColorRgba};
use crate::drawable::{DrawableKind, DrawableStore};
use crate::error::{CompositorError, Result};
use crate::layer::{LayerId, LayerRegistry};
use crate::scene::{QueueKind, RenderQueue, RenderTypes, Value, ZIndex};

use super::flush::{flush_queues, FlushCtx, FlushStats};
use super::{BatchTextures, FrameBackend, Visibility};

/// Compositor configuration.
#[derive(Debug, Clone)]
pub struct CompositorConfig {
    /// Full-screen clear issued at the start of every frame.
    pub clear_color: ColorRgba,
    /// Operation name → queue classification used by [`Compositor::submit`].
    pub render_types: RenderTypes,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            clear_color: ColorRgba::from_rgba8(25, 25, 35, 255),
            render_types: RenderTypes::builtin(),
        }
    }
}

/// Host-owned state read by one flush.
pub struct FrameView<'a> {
    pub camera_2d: Camera2D,
    pub camera_3d: Camera3D,
    pub visibility: &'a dyn Visibility,
    pub textures: &'a dyn BatchTextures,
}

/// Owns the layer registry, drawable metadata and render queue of one
/// script context, and flushes them once per frame.
///
/// Lifecycle per frame:
/// - the script calls [`submit`] (or [`enqueue`]) while it runs
/// - the game loop calls [`flush`] once, which drains all queues
///
/// [`submit`]: Compositor::submit
/// [`enqueue`]: Compositor::enqueue
/// [`flush`]: Compositor::flush
#[derive(Debug, Default)]
pub struct Compositor {
    config: CompositorConfig,
    layers: LayerRegistry,
    drawables: DrawableStore,
    queue: RenderQueue,
    frames: u64,
}

impl Compositor {
    pub fn new(config: CompositorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    #[inline]
    pub fn set_clear_color(&mut self, color: ColorRgba) {
        self.config.clear_color = color;
    }

    #[inline]
    pub fn register_render_type(&mut self, name: &str, kind: QueueKind) {
        self.config.render_types.register(name, kind);
    }

    #[inline]
    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    #[inline]
    pub fn drawables(&self) -> &DrawableStore {
        &self.drawables
    }

    #[inline]
    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    /// Frames flushed so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    // ── layers ────────────────────────────────────────────────────────────

    pub fn create_layer(&mut self, name: &str, order: i32) -> Result<LayerId> {
        self.layers.create(name, order)
    }

    pub fn set_layer_order(&mut self, layer: &str, order: i32) -> Result<()> {
        self.layers.set_order(layer, order)
    }

    pub fn set_layer_visible(&mut self, layer: &str, visible: bool) -> Result<()> {
        self.layers.set_visible(layer, visible)
    }

    pub fn set_layer_parallax(&mut self, layer: &str, px: f32, py: f32) -> Result<()> {
        self.layers.set_parallax(layer, px, py)
    }

    pub fn set_layer_scroll(&mut self, layer: &str, sx: f32, sy: f32) -> Result<()> {
        self.layers.set_scroll(layer, sx, sy)
    }

    /// Detaches every drawable from `layer`; the layer itself stays.
    pub fn clear_layer(&mut self, layer: &str) -> usize {
        let detached = self.drawables.clear_layer(layer);
        log::debug!("layer {layer:?} cleared, {detached} drawables detached");
        detached
    }

    // ── drawables ─────────────────────────────────────────────────────────

    pub fn set_drawable_layer(&mut self, kind: DrawableKind, id: &str, layer: &str) {
        self.drawables.set_layer(kind, id, layer);
    }

    pub fn set_drawable_z(&mut self, kind: DrawableKind, id: &str, z: i32) {
        self.drawables.set_z_index(kind, id, ZIndex(z));
    }

    /// Drops the metadata of a destroyed drawable.
    ///
    /// Fails if `id` was never given a layer or z-index.
    pub fn forget_drawable(&mut self, kind: DrawableKind, id: &str) -> Result<()> {
        match self.drawables.remove(kind, id) {
            Some(_) => Ok(()),
            None => Err(CompositorError::UnknownDrawable { kind, id: id.to_owned() }),
        }
    }

    // ── queue ─────────────────────────────────────────────────────────────

    /// Queues `name` if the render-type table classifies it.
    ///
    /// Returns `false` for unclassified names, which the host should draw immediately.
    pub fn submit(&mut self, name: &str, args: Vec<Value>) -> bool {
        self.queue.submit(&self.config.render_types, name, args)
    }

    pub fn enqueue(&mut self, kind: QueueKind, name: &str, args: Vec<Value>) {
        self.queue.enqueue(kind, name, args);
    }

    /// Drops everything queued for the current frame.
    pub fn clear_queues(&mut self) {
        self.queue.clear();
    }

    /// Draws and drains everything queued since the last flush.
    pub fn flush<B>(&mut self, view: &FrameView<'_>, backend: &mut B) -> FlushStats
    where
        B: FrameBackend + ?Sized,
    {
        let drained = self.queue.drain();
        let ctx = FlushCtx {
            layers: &self.layers,
            resolver: &self.drawables,
            visibility: view.visibility,
            textures: view.textures,
            camera_2d: view.camera_2d,
            camera_3d: view.camera_3d,
            clear_color: self.config.clear_color,
        };
        let stats = flush_queues(&drained, &ctx, backend);

        self.queue.recycle(drained);
        self.frames += 1;
        stats
    }
}
