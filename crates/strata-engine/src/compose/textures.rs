use std::collections::HashMap;

use crate::scene::{OpKind, RenderCmd};

use super::BatchTextures;

/// Sprite id → owning texture id, used to group sprite draws inside a batch.
///
/// Texture draws resolve to their first argument directly.
#[derive(Debug, Default, Clone)]
pub struct SpriteTextures {
    by_sprite: HashMap<String, String>,
}

impl SpriteTextures {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, sprite: &str, texture: impl Into<String>) {
        self.by_sprite.insert(sprite.to_owned(), texture.into());
    }

    pub fn remove(&mut self, sprite: &str) -> Option<String> {
        self.by_sprite.remove(sprite)
    }

    #[inline]
    pub fn texture_of(&self, sprite: &str) -> Option<&str> {
        self.by_sprite.get(sprite).map(String::as_str)
    }
}

impl BatchTextures for SpriteTextures {
    fn batch_texture<'a>(&'a self, cmd: &'a RenderCmd) -> &'a str {
        let first = cmd.first_str();
        match cmd.op() {
            OpKind::SpriteDraw => first.and_then(|id| self.texture_of(id)).unwrap_or(""),
            OpKind::TextureDraw => first.unwrap_or(""),
            _ => "",
        }
    }
}
