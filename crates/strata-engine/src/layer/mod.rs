//! Layer registry: draw order, visibility and parallax/scroll per layer id.

mod id;
mod registry;

pub use id::LayerId;
pub use registry::{Layer, LayerRegistry};
