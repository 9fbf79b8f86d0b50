//! Render queue types.
//!
//! Responsibilities:
//! - record deferred draw commands per frame, split into 2D, 3D and GUI queues
//! - classify operation names (queue membership, layer-awareness, batching)
//! - provide the deterministic 2D sort key (layer order, z-index, enqueue order)

mod cmd;
mod key;
mod op;
mod queue;
mod types;
mod value;
mod z_index;

pub use cmd::RenderCmd;
pub use key::SortKey;
pub use op::OpKind;
pub use queue::{DrainedQueues, RenderQueue};
pub use types::{QueueKind, RenderTypes};
pub use value::Value;
pub use z_index::ZIndex;
