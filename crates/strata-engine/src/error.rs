use thiserror::Error;

use crate::drawable::DrawableKind;

/// Errors raised by mutating registry calls.
///
/// Read paths never produce these: unknown ids resolve to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositorError {
    #[error("unknown layer: {0}")]
    LayerNotFound(String),
    #[error("layer already exists: {0}")]
    LayerExists(String),
    #[error("unknown {kind} id: {id}")]
    UnknownDrawable { kind: DrawableKind, id: String },
}

pub type Result<T> = std::result::Result<T, CompositorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_id() {
        assert_eq!(CompositorError::LayerNotFound("fg".into()).to_string(), "unknown layer: fg");
        assert_eq!(
            CompositorError::UnknownDrawable { kind: DrawableKind::Sprite, id: "sprite_3".into() }.to_string(),
            "unknown sprite id: sprite_3"
        );
    }
}
