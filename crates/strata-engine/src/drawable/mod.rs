//! Drawable metadata: which layer and z-index each drawable sorts under.

mod kind;
mod store;

pub use kind::DrawableKind;
pub use store::{DrawableMeta, DrawableStore};
