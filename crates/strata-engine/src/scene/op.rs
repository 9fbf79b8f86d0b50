use crate::drawable::DrawableKind;

/// What the compositor needs to know about a queued operation.
///
/// Derived once from the operation name when the command is built; names are
/// matched case-insensitively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKind {
    /// Draws a sprite by id. Layer-aware, cullable and batchable.
    SpriteDraw,
    /// Plain/extended/rect/pro texture draw. Batchable; first argument is the texture id.
    TextureDraw,
    BatchBegin,
    BatchEnd,
    /// Draws another layer-aware drawable (background, tilemap, particles).
    Drawable(DrawableKind),
    Other,
}

impl OpKind {
    pub fn classify(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "spritedraw" | "drawsprite" | "sprite" => OpKind::SpriteDraw,
            "drawtexture" | "drawtextureex" | "drawtexturerec" | "drawtexturepro" => OpKind::TextureDraw,
            "spritebatchbegin" => OpKind::BatchBegin,
            "spritebatchend" => OpKind::BatchEnd,
            "drawbackground" => OpKind::Drawable(DrawableKind::Background),
            "drawtilemap" => OpKind::Drawable(DrawableKind::Tilemap),
            "drawparticles" => OpKind::Drawable(DrawableKind::ParticleSystem),
            "drawparticleemitter" => OpKind::Drawable(DrawableKind::ParticleEmitter2D),
            _ => OpKind::Other,
        }
    }

    /// Table consulted for the command's layer assignment, if any.
    #[inline]
    pub fn drawable_kind(self) -> Option<DrawableKind> {
        match self {
            OpKind::SpriteDraw => Some(DrawableKind::Sprite),
            OpKind::Drawable(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether the command may be reordered by texture inside a sprite batch.
    #[inline]
    pub fn is_batchable(self) -> bool {
        matches!(self, OpKind::SpriteDraw | OpKind::TextureDraw)
    }

    #[inline]
    pub fn is_batch_marker(self) -> bool {
        matches!(self, OpKind::BatchBegin | OpKind::BatchEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_ignores_case() {
        assert_eq!(OpKind::classify("SpriteDraw"), OpKind::SpriteDraw);
        assert_eq!(OpKind::classify("SPRITEBATCHEND"), OpKind::BatchEnd);
        assert_eq!(OpKind::classify("drawTexturePro"), OpKind::TextureDraw);
    }

    #[test]
    fn layer_aware_ops_map_to_their_tables() {
        assert_eq!(OpKind::classify("DrawParticles").drawable_kind(), Some(DrawableKind::ParticleSystem));
        assert_eq!(
            OpKind::classify("DrawParticleEmitter").drawable_kind(),
            Some(DrawableKind::ParticleEmitter2D)
        );
        assert_eq!(OpKind::classify("DrawSprite").drawable_kind(), Some(DrawableKind::Sprite));
        assert_eq!(OpKind::classify("DrawTexture").drawable_kind(), None);
    }

    #[test]
    fn only_sprite_and_texture_draws_batch() {
        assert!(OpKind::SpriteDraw.is_batchable());
        assert!(OpKind::TextureDraw.is_batchable());
        assert!(!OpKind::Drawable(DrawableKind::Background).is_batchable());
        assert!(!OpKind::classify("DrawRectangle").is_batchable());
    }
}
