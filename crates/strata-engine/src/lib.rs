//! Strata engine crate.
//!
//! Hybrid 2D/3D render-queue compositor. Scripts record draw calls into three
//! queues during a frame; once per frame the compositor sorts the 2D queue by
//! layer and z-index, draws each layer under its own parallax/scroll camera,
//! culls and batches sprites, then draws the 3D and GUI queues.
//!
//! The renderer itself is the host's: it plugs in through
//! [`compose::FrameBackend`].

pub mod coords;
pub mod logging;

pub mod compose;
pub mod cull;
pub mod drawable;
pub mod error;
pub mod layer;
pub mod scene;

pub use compose::{Compositor, CompositorConfig, FlushStats, FrameView};
pub use error::{CompositorError, Result};
