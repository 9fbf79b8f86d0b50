use std::fmt;

/// Kinds of drawables that carry a layer assignment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawableKind {
    Sprite,
    Background,
    Tilemap,
    ParticleSystem,
    /// Texture-quad emitter drawn in 2D.
    ParticleEmitter2D,
}

impl DrawableKind {
    pub const COUNT: usize = 5;

    pub const ALL: [DrawableKind; Self::COUNT] = [
        DrawableKind::Sprite,
        DrawableKind::Background,
        DrawableKind::Tilemap,
        DrawableKind::ParticleSystem,
        DrawableKind::ParticleEmitter2D,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            DrawableKind::Sprite => 0,
            DrawableKind::Background => 1,
            DrawableKind::Tilemap => 2,
            DrawableKind::ParticleSystem => 3,
            DrawableKind::ParticleEmitter2D => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DrawableKind::Sprite => "sprite",
            DrawableKind::Background => "background",
            DrawableKind::Tilemap => "tilemap",
            DrawableKind::ParticleSystem => "particle system",
            DrawableKind::ParticleEmitter2D => "particle emitter",
        }
    }
}

impl fmt::Display for DrawableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_match_all() {
        for (i, kind) in DrawableKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
