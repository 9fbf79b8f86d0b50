//! Frame composition.
//!
//! Turns the drained 2D/3D/GUI queues into backend calls: layer ordering,
//! per-layer parallax cameras, hidden-layer and view culling, and sprite
//! batching by texture. Hosts plug in through the traits in this module.

mod batch;
mod compositor;
mod flush;
mod host;
mod textures;

#[cfg(test)]
pub(crate) mod testing;

pub use compositor::{Compositor, CompositorConfig, FrameView};
pub use flush::{flush_queues, FlushCtx, FlushStats};
pub use host::{AlwaysVisible, BatchTextures, DrawInvoker, FrameBackend, LayerResolver, Visibility};
pub use textures::SpriteTextures;
