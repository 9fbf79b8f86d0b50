use std::collections::HashMap;

use crate::coords::Vec2;
use crate::error::{CompositorError, Result};

use super::LayerId;

/// Per-layer ordering, visibility and camera-modifier state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layer {
    /// Draw priority. Lower orders are drawn first (further back).
    pub order: i32,
    pub visible: bool,
    /// Multiplies the base camera target.
    pub parallax: Vec2,
    /// Added to the camera target and offset after parallax.
    pub scroll: Vec2,
}

impl Layer {
    /// State of the default layer, and of any layer id that was never created.
    pub const DEFAULT: Layer = Layer::with_order(0);

    #[inline]
    pub const fn with_order(order: i32) -> Self {
        Self {
            order,
            visible: true,
            parallax: Vec2::one(),
            scroll: Vec2::zero(),
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Source of truth for layer draw order, visibility, parallax and scroll.
///
/// Read accessors never fail: unknown ids report [`Layer::DEFAULT`] values so
/// the flush path can query unconditionally. Setters reject unknown ids.
#[derive(Debug)]
pub struct LayerRegistry {
    layers: HashMap<LayerId, Layer>,
    next_seq: u32,
}

impl LayerRegistry {
    /// Creates a registry holding only the default layer.
    pub fn new() -> Self {
        let mut layers = HashMap::new();
        layers.insert(LayerId::default_layer(), Layer::DEFAULT);
        Self { layers, next_seq: 0 }
    }

    /// Creates a layer and returns its id.
    ///
    /// An empty `name` gets a generated `layer_N` id.
    pub fn create(&mut self, name: &str, order: i32) -> Result<LayerId> {
        let id = if name.is_empty() {
            self.generate_id()
        } else {
            self.next_seq = self.next_seq.wrapping_add(1);
            LayerId::from(name)
        };

        if self.layers.contains_key(&id) {
            return Err(CompositorError::LayerExists(id.as_str().to_owned()));
        }

        log::debug!("layer {id} created at order {order}");
        self.layers.insert(id.clone(), Layer::with_order(order));
        Ok(id)
    }

    fn generate_id(&mut self) -> LayerId {
        loop {
            self.next_seq = self.next_seq.wrapping_add(1);
            let id = LayerId::new(format!("layer_{}", self.next_seq));
            if !self.layers.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn set_order(&mut self, id: &str, order: i32) -> Result<()> {
        self.layer_mut(id)?.order = order;
        log::debug!("layer {id:?} order -> {order}");
        Ok(())
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        self.layer_mut(id)?.visible = visible;
        log::debug!("layer {id:?} visible -> {visible}");
        Ok(())
    }

    pub fn set_parallax(&mut self, id: &str, px: f32, py: f32) -> Result<()> {
        self.layer_mut(id)?.parallax = Vec2::new(px, py);
        Ok(())
    }

    pub fn set_scroll(&mut self, id: &str, sx: f32, sy: f32) -> Result<()> {
        self.layer_mut(id)?.scroll = Vec2::new(sx, sy);
        Ok(())
    }

    fn layer_mut(&mut self, id: &str) -> Result<&mut Layer> {
        self.layers
            .get_mut(id)
            .ok_or_else(|| CompositorError::LayerNotFound(id.to_owned()))
    }

    // ── read paths ────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Layer state, or [`Layer::DEFAULT`] for unknown ids.
    #[inline]
    pub fn layer_or_default(&self, id: &str) -> Layer {
        self.get(id).copied().unwrap_or(Layer::DEFAULT)
    }

    #[inline]
    pub fn order(&self, id: &str) -> i32 {
        self.layer_or_default(id).order
    }

    #[inline]
    pub fn is_visible(&self, id: &str) -> bool {
        self.layer_or_default(id).visible
    }

    #[inline]
    pub fn parallax(&self, id: &str) -> Vec2 {
        self.layer_or_default(id).parallax
    }

    #[inline]
    pub fn scroll(&self, id: &str) -> Vec2 {
        self.layer_or_default(id).scroll
    }

    /// Number of layers, the default layer included.
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in draw order; equal orders are ordered by id.
    pub fn iter_by_order(&self) -> Vec<(&LayerId, &Layer)> {
        let mut out: Vec<_> = self.layers.iter().collect();
        out.sort_by(|a, b| a.1.order.cmp(&b.1.order).then_with(|| a.0.cmp(b.0)));
        out
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
