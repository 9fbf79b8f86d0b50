use core::cmp::Ordering;

use super::ZIndex;

/// Sort key for 2D queue entries.
///
/// Ordering rules:
/// 1) `layer_order`: ascending (back-to-front layers)
/// 2) `z`: ascending within the layer order
/// 3) `seq`: enqueue position, so ties keep their submission order
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub layer_order: i32,
    pub z: ZIndex,
    pub seq: usize,
}

impl SortKey {
    #[inline]
    pub const fn new(layer_order: i32, z: ZIndex, seq: usize) -> Self {
        Self { layer_order, z, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.layer_order
            .cmp(&other.layer_order)
            .then(self.z.cmp(&other.z))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
