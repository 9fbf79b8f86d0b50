use std::collections::HashMap;

use crate::layer::LayerId;
use crate::scene::{RenderCmd, ZIndex};

use super::DrawableKind;

/// Layer assignment of one drawable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawableMeta {
    pub layer: LayerId,
    pub z: ZIndex,
}

/// Drawable id → `(layer, z)` tables, one per [`DrawableKind`].
///
/// The kind-specific state (textures, transforms, animation) lives with the
/// host; this store only answers "where does this drawable sort". Entries are
/// created implicitly by the setters, and a drawable without an entry sorts
/// as default layer, z 0.
#[derive(Debug, Default)]
pub struct DrawableStore {
    tables: [HashMap<String, DrawableMeta>; DrawableKind::COUNT],
}

impl DrawableStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_layer(&mut self, kind: DrawableKind, id: &str, layer: impl Into<LayerId>) {
        self.entry(kind, id).layer = layer.into();
    }

    pub fn set_z_index(&mut self, kind: DrawableKind, id: &str, z: ZIndex) {
        self.entry(kind, id).z = z;
    }

    fn entry(&mut self, kind: DrawableKind, id: &str) -> &mut DrawableMeta {
        self.tables[kind.index()].entry(id.to_owned()).or_default()
    }

    #[inline]
    pub fn get(&self, kind: DrawableKind, id: &str) -> Option<&DrawableMeta> {
        self.tables[kind.index()].get(id)
    }

    /// Forgets a destroyed drawable.
    pub fn remove(&mut self, kind: DrawableKind, id: &str) -> Option<DrawableMeta> {
        self.tables[kind.index()].remove(id)
    }

    /// Moves every drawable assigned to `layer` back to the default layer.
    ///
    /// Z-indices are kept. Returns the number of drawables detached.
    pub fn clear_layer(&mut self, layer: &str) -> usize {
        let mut detached = 0;
        for table in &mut self.tables {
            for meta in table.values_mut().filter(|m| m.layer.as_str() == layer) {
                meta.layer = LayerId::default_layer();
                detached += 1;
            }
        }
        detached
    }

    /// Layer and z-index a queued command sorts under.
    ///
    /// Commands that are not layer-aware, lack a string id in their first
    /// argument, or name an unknown drawable resolve to the default layer, z 0.
    pub fn resolve<'a>(&'a self, cmd: &RenderCmd) -> (&'a str, ZIndex) {
        cmd.op()
            .drawable_kind()
            .zip(cmd.first_str())
            .and_then(|(kind, id)| self.get(kind, id))
            .map_or(("", ZIndex::BASE), |meta| (meta.layer.as_str(), meta.z))
    }

    /// Number of drawables with an explicit assignment, across all kinds.
    pub fn len(&self) -> usize {
        self.tables.iter().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Value;

    fn cmd(name: &str, id: &str) -> RenderCmd {
        RenderCmd::new(name, vec![Value::from(id)])
    }

    #[test]
    fn setters_create_entries_implicitly() {
        let mut store = DrawableStore::new();
        store.set_z_index(DrawableKind::Sprite, "sprite_1", ZIndex(4));
        let meta = store.get(DrawableKind::Sprite, "sprite_1").unwrap();
        assert!(meta.layer.is_default());
        assert_eq!(meta.z, ZIndex(4));
    }

    #[test]
    fn tables_are_separate_per_kind() {
        let mut store = DrawableStore::new();
        store.set_layer(DrawableKind::Sprite, "x", "fg");
        assert!(store.get(DrawableKind::Tilemap, "x").is_none());
    }

    #[test]
    fn resolve_uses_table_for_op_kind() {
        let mut store = DrawableStore::new();
        store.set_layer(DrawableKind::Sprite, "s1", "bg");
        store.set_z_index(DrawableKind::Sprite, "s1", ZIndex(2));
        store.set_layer(DrawableKind::ParticleSystem, "ps1", "fx");

        assert_eq!(store.resolve(&cmd("SpriteDraw", "s1")), ("bg", ZIndex(2)));
        assert_eq!(store.resolve(&cmd("DrawParticles", "ps1")), ("fx", ZIndex(0)));
        // Same id through a different kind's op.
        assert_eq!(store.resolve(&cmd("DrawTilemap", "s1")), ("", ZIndex(0)));
    }

    #[test]
    fn resolve_defaults_for_plain_ops_and_unknown_ids() {
        let mut store = DrawableStore::new();
        store.set_layer(DrawableKind::Sprite, "s1", "bg");
        assert_eq!(store.resolve(&cmd("DrawRectangle", "s1")), ("", ZIndex(0)));
        assert_eq!(store.resolve(&cmd("SpriteDraw", "ghost")), ("", ZIndex(0)));
        assert_eq!(store.resolve(&RenderCmd::new("SpriteDraw", vec![])), ("", ZIndex(0)));
    }

    #[test]
    fn clear_layer_detaches_all_kinds_and_keeps_z() {
        let mut store = DrawableStore::new();
        store.set_layer(DrawableKind::Sprite, "s1", "bg");
        store.set_z_index(DrawableKind::Sprite, "s1", ZIndex(3));
        store.set_layer(DrawableKind::Background, "bg_1", "bg");
        store.set_layer(DrawableKind::Sprite, "s2", "fg");

        assert_eq!(store.clear_layer("bg"), 2);

        let s1 = store.get(DrawableKind::Sprite, "s1").unwrap();
        assert!(s1.layer.is_default());
        assert_eq!(s1.z, ZIndex(3));
        assert_eq!(store.get(DrawableKind::Sprite, "s2").unwrap().layer.as_str(), "fg");
    }

    #[test]
    fn remove_forgets_drawable() {
        let mut store = DrawableStore::new();
        store.set_layer(DrawableKind::Tilemap, "map", "world");
        assert!(store.remove(DrawableKind::Tilemap, "map").is_some());
        assert!(store.is_empty());
    }
}
