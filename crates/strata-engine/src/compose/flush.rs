use crate::coords::{Camera2D, Camera3D, ColorRgba};
use crate::layer::LayerRegistry;
use crate::scene::{DrainedQueues, OpKind, RenderCmd, SortKey};

use super::batch::SpriteBatch;
use super::{BatchTextures, FrameBackend, LayerResolver, Visibility};

/// Read-only inputs of one flush. Cameras are snapshots taken by the caller.
pub struct FlushCtx<'a> {
    pub layers: &'a LayerRegistry,
    pub resolver: &'a dyn LayerResolver,
    pub visibility: &'a dyn Visibility,
    pub textures: &'a dyn BatchTextures,
    pub camera_2d: Camera2D,
    pub camera_3d: Camera3D,
    pub clear_color: ColorRgba,
}

/// Counters for one flush.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Commands the backend accepted.
    pub dispatched: usize,
    /// Commands the backend rejected (logged and skipped).
    pub failed: usize,
    /// Sprite draws skipped by the visibility predicate.
    pub culled: usize,
    /// Entries skipped because their layer is hidden.
    pub hidden: usize,
    /// 2D layer runs, hidden ones included.
    pub runs: usize,
    pub batches: usize,
}

struct Entry<'e> {
    key: SortKey,
    layer: &'e str,
    cmd: &'e RenderCmd,
}

/// Renders one frame from drained queues.
///
/// Order of work:
/// 1) frame begin + background clear
/// 2) 2D entries sorted by (layer order, z, enqueue order), drawn in runs of
///    the same `(order, layer id)`, each run under its own parallax/scroll camera
/// 3) 3D entries in enqueue order under the 3D camera
/// 4) GUI entries in enqueue order under the base 2D camera
/// 5) frame end
///
/// Never fails: unknown layers and drawables fall back to defaults and
/// backend errors are logged per command.
pub fn flush_queues<B>(queues: &DrainedQueues, ctx: &FlushCtx<'_>, backend: &mut B) -> FlushStats
where
    B: FrameBackend + ?Sized,
{
    let mut pass = Pass { ctx, backend, stats: FlushStats::default() };

    pass.backend.begin_frame();
    pass.backend.clear_background(ctx.clear_color);
    pass.draw_2d(&queues.scene_2d);
    pass.draw_3d(&queues.scene_3d);
    pass.draw_gui(&queues.gui);
    pass.backend.end_frame();

    log::trace!("flush: {:?}", pass.stats);
    pass.stats
}

struct Pass<'p, 'a, B: ?Sized> {
    ctx: &'p FlushCtx<'a>,
    backend: &'p mut B,
    stats: FlushStats,
}

impl<B: FrameBackend + ?Sized> Pass<'_, '_, B> {
    fn draw_2d(&mut self, cmds: &[RenderCmd]) {
        let ctx = self.ctx;
        let mut entries: Vec<Entry<'_>> = cmds
            .iter()
            .enumerate()
            .map(|(seq, cmd)| {
                let (layer, z) = ctx.resolver.resolve(cmd);
                Entry {
                    key: SortKey::new(ctx.layers.order(layer), z, seq),
                    layer,
                    cmd,
                }
            })
            .collect();

        entries.sort_by(|a, b| a.key.cmp(&b.key));

        // Layers sharing an order value still get separate runs: parallax,
        // scroll and visibility are per layer id.
        for run in entries.chunk_by(|a, b| a.key.layer_order == b.key.layer_order && a.layer == b.layer) {
            self.draw_run(run);
        }
    }

    fn draw_run(&mut self, run: &[Entry<'_>]) {
        let ctx = self.ctx;
        let layer = ctx.layers.layer_or_default(run[0].layer);
        self.stats.runs += 1;

        if !layer.visible {
            self.stats.hidden += run.len();
            return;
        }

        let camera = ctx.camera_2d.for_layer(layer.parallax, layer.scroll);
        self.backend.begin_mode_2d(&camera);

        let mut batch = SpriteBatch::new();
        for entry in run {
            let cmd = entry.cmd;
            match cmd.op() {
                OpKind::BatchBegin => {
                    if batch.is_open() {
                        self.close_batch(&mut batch);
                    }
                    batch.open();
                }
                OpKind::BatchEnd => {
                    if batch.is_open() {
                        self.close_batch(&mut batch);
                    }
                }
                OpKind::SpriteDraw if self.is_culled(cmd) => self.stats.culled += 1,
                op if op.is_batchable() && batch.is_open() => {
                    batch.push(ctx.textures.batch_texture(cmd), cmd);
                }
                _ => self.dispatch(cmd),
            }
        }

        // Begin without End: the batch still drains at the end of the run.
        if batch.is_open() {
            self.close_batch(&mut batch);
        }

        self.backend.end_mode_2d();
    }

    fn draw_3d(&mut self, cmds: &[RenderCmd]) {
        self.backend.begin_mode_3d(&self.ctx.camera_3d);
        for cmd in cmds {
            self.dispatch(cmd);
        }
        self.backend.end_mode_3d();
    }

    fn draw_gui(&mut self, cmds: &[RenderCmd]) {
        self.backend.begin_mode_2d(&self.ctx.camera_2d);
        for cmd in cmds {
            self.dispatch(cmd);
        }
        self.backend.end_mode_2d();
    }

    fn close_batch(&mut self, batch: &mut SpriteBatch<'_>) {
        let n = batch.close(|cmd| self.dispatch(cmd));
        self.stats.batches += 1;
        log::trace!("sprite batch closed with {n} draws");
    }

    #[inline]
    fn is_culled(&self, cmd: &RenderCmd) -> bool {
        cmd.first_str()
            .is_some_and(|id| !self.ctx.visibility.is_visible(id))
    }

    fn dispatch(&mut self, cmd: &RenderCmd) {
        match self.backend.invoke(cmd) {
            Ok(()) => self.stats.dispatched += 1,
            Err(err) => {
                self.stats.failed += 1;
                log::warn!("draw {} failed: {err:#}", cmd.name());
            }
        }
    }
}
