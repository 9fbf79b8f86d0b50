//! View culling for sprite draws.

mod view;

pub use view::{CullConfig, SpriteBounds, ViewCuller};
