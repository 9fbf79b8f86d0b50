mod backend;

use anyhow::Result;
use strata_engine::compose::SpriteTextures;
use strata_engine::coords::{Camera2D, Camera3D, Vec2, Viewport};
use strata_engine::cull::{CullConfig, SpriteBounds, ViewCuller};
use strata_engine::drawable::DrawableKind;
use strata_engine::logging::{init_logging, LoggingConfig};
use strata_engine::scene::Value;
use strata_engine::{Compositor, CompositorConfig, FrameView};

use backend::TraceBackend;

const FRAMES: u32 = 3;
const SCREEN: Viewport = Viewport::new(800.0, 450.0);

fn main() -> Result<()> {
    let mut logging = LoggingConfig::default();
    if std::env::args().any(|arg| arg == "--trace-flushes") {
        logging = logging.tracing_flushes();
    }
    init_logging(logging);

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        STRATA COMPOSITOR  v0.1         ║");
    println!("  ║   layers · parallax · culling · batch  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut comp = Compositor::new(CompositorConfig::default());

    // ── layers ────────────────────────────────────────────────────────────
    let sky = comp.create_layer("sky", -2)?;
    comp.set_layer_parallax(sky.as_str(), 0.1, 0.1)?;
    let hills = comp.create_layer("hills", -1)?;
    comp.set_layer_parallax(hills.as_str(), 0.5, 1.0)?;
    let hud = comp.create_layer("hud", 10)?;
    comp.set_layer_parallax(hud.as_str(), 0.0, 0.0)?;
    let debug = comp.create_layer("", 20)?;
    comp.set_layer_visible(debug.as_str(), false)?;

    // ── drawables ─────────────────────────────────────────────────────────
    let mut textures = SpriteTextures::new();
    let mut culler = ViewCuller::new(CullConfig { enabled: true, screen: SCREEN, ..CullConfig::default() });

    comp.set_drawable_layer(DrawableKind::Background, "bg_1", sky.as_str());
    for (i, x) in [40.0, 300.0, 2_000.0].into_iter().enumerate() {
        let id = format!("sprite_{}", i + 1);
        textures.set(&id, if i % 2 == 0 { "tex_1" } else { "tex_2" });
        culler.set_sprite(&id, SpriteBounds::new(Vec2::new(x, 200.0), Vec2::new(32.0, 32.0)));
    }
    comp.set_drawable_layer(DrawableKind::Sprite, "sprite_2", hills.as_str());
    comp.set_drawable_z(DrawableKind::Sprite, "sprite_3", 5);
    comp.set_drawable_layer(DrawableKind::Sprite, "sprite_4", debug.as_str());
    comp.set_drawable_layer(DrawableKind::ParticleEmitter2D, "pe2d_1", hud.as_str());

    let mut backend = TraceBackend::default().support(&[
        "DrawBackground",
        "SpriteDraw",
        "DrawRectangle",
        "DrawParticleEmitter",
        "DrawCube",
        "DrawGrid",
        "GuiLabel",
    ]);

    let mut camera_2d = Camera2D::new(SCREEN.half_extents(), SCREEN.half_extents(), 0.0, 1.0);
    let camera_3d = Camera3D::default();

    for frame in 0..FRAMES {
        // ── script ────────────────────────────────────────────────────────
        comp.submit("DrawBackground", vec![Value::from("bg_1")]);
        comp.submit("SpriteBatchBegin", vec![]);
        for id in ["sprite_1", "sprite_2", "sprite_3", "sprite_4"] {
            comp.submit("SpriteDraw", vec![Value::from(id)]);
        }
        comp.submit("SpriteBatchEnd", vec![]);
        comp.submit("DrawRectangle", vec![10.into(), 10.into(), 64.into(), 16.into()]);
        comp.submit("DrawParticleEmitter", vec![Value::from("pe2d_1")]);
        comp.submit("DrawTextureNPatch", vec![Value::from("tex_9")]);
        comp.submit("DrawGrid", vec![10.into(), 1.0.into()]);
        comp.submit("DrawCube", vec![0.into(), 0.into(), 0.into(), 2.into()]);
        comp.submit("GuiLabel", vec![Value::from(format!("frame {frame}"))]);

        // ── flush ─────────────────────────────────────────────────────────
        culler.set_camera(camera_2d);
        let view = FrameView {
            camera_2d,
            camera_3d,
            visibility: &culler,
            textures: &textures,
        };
        let stats = comp.flush(&view, &mut backend);
        log::info!("frame {frame}: {stats:?}");

        camera_2d.target = camera_2d.target + Vec2::new(120.0, 0.0);
    }

    println!();
    println!("  {} frames, {} draw calls issued.", comp.frame_count(), backend.draw_calls);
    println!();
    Ok(())
}
