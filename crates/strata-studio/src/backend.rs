use std::collections::HashSet;

use anyhow::bail;
use strata_engine::compose::{DrawInvoker, FrameBackend};
use strata_engine::coords::{Camera2D, Camera3D, ColorRgba};
use strata_engine::scene::RenderCmd;

/// Stand-in renderer that logs every call instead of drawing.
///
/// Only operations registered with [`TraceBackend::support`] succeed; anything
/// else fails the way an unbound foreign call would.
#[derive(Debug, Default)]
pub struct TraceBackend {
    supported: HashSet<String>,
    pub draw_calls: usize,
}

impl TraceBackend {
    pub fn support(mut self, names: &[&str]) -> Self {
        self.supported.extend(names.iter().map(|n| n.to_ascii_lowercase()));
        self
    }
}

impl DrawInvoker for TraceBackend {
    fn invoke(&mut self, cmd: &RenderCmd) -> anyhow::Result<()> {
        if !self.supported.contains(&cmd.name().to_ascii_lowercase()) {
            bail!("no binding for {}", cmd.name());
        }
        self.draw_calls += 1;
        let args: Vec<String> = cmd.args().iter().map(ToString::to_string).collect();
        log::info!("    {}({})", cmd.name(), args.join(", "));
        Ok(())
    }
}

impl FrameBackend for TraceBackend {
    fn begin_frame(&mut self) {
        log::info!("BeginDrawing");
    }

    fn clear_background(&mut self, color: ColorRgba) {
        log::info!("  ClearBackground({:?})", color.to_rgba8());
    }

    fn begin_mode_2d(&mut self, camera: &Camera2D) {
        log::info!(
            "  BeginMode2D(target=({:.1}, {:.1}) offset=({:.1}, {:.1}) zoom={})",
            camera.target.x,
            camera.target.y,
            camera.offset.x,
            camera.offset.y,
            camera.zoom
        );
    }

    fn end_mode_2d(&mut self) {
        log::info!("  EndMode2D");
    }

    fn begin_mode_3d(&mut self, camera: &Camera3D) {
        log::info!(
            "  BeginMode3D(position=({}, {}, {}) fovy={})",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.fovy
        );
    }

    fn end_mode_3d(&mut self) {
        log::info!("  EndMode3D");
    }

    fn end_frame(&mut self) {
        log::info!("EndDrawing");
    }
}
