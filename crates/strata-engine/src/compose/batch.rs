use crate::scene::RenderCmd;

/// Sprite batch accumulated between `SpriteBatchBegin` and `SpriteBatchEnd`.
///
/// Lives for one layer run of one flush. Closing the batch emits pending
/// commands grouped by texture id; equal textures keep their submission order.
#[derive(Debug, Default)]
pub(crate) struct SpriteBatch<'a> {
    open: bool,
    pending: Vec<(&'a str, &'a RenderCmd)>,
}

impl<'a> SpriteBatch<'a> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    #[inline]
    pub(crate) fn push(&mut self, texture: &'a str, cmd: &'a RenderCmd) {
        debug_assert!(self.open, "push on a closed sprite batch");
        self.pending.push((texture, cmd));
    }

    /// Emits pending commands texture-sorted and closes the batch.
    ///
    /// Returns the number of commands emitted.
    pub(crate) fn close(&mut self, mut emit: impl FnMut(&'a RenderCmd)) -> usize {
        // `sort_by` is stable: same-texture entries stay in submission order.
        self.pending.sort_by(|a, b| a.0.cmp(b.0));
        let n = self.pending.len();
        for (_, cmd) in self.pending.drain(..) {
            emit(cmd);
        }
        self.open = false;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Value;

    #[test]
    fn close_groups_by_texture_stably() {
        let cmds: Vec<RenderCmd> = (0..4)
            .map(|i| RenderCmd::new("SpriteDraw", vec![Value::from(format!("s{i}"))]))
            .collect();
        let textures = ["b", "a", "b", "a"];

        let mut batch = SpriteBatch::new();
        batch.open();
        for (cmd, tex) in cmds.iter().zip(textures) {
            batch.push(tex, cmd);
        }

        let mut out = Vec::new();
        assert_eq!(batch.close(|c| out.push(c.first_str().unwrap_or_default())), 4);
        assert_eq!(out, ["s1", "s3", "s0", "s2"]);
        assert!(!batch.is_open());
    }

    #[test]
    fn unresolved_texture_sorts_first() {
        let a = RenderCmd::new("DrawTexture", vec![Value::from("a")]);
        let none = RenderCmd::new("SpriteDraw", vec![]);
        let mut batch = SpriteBatch::new();
        batch.open();
        batch.push("a", &a);
        batch.push("", &none);

        let mut out = Vec::new();
        batch.close(|c| out.push(c.name()));
        assert_eq!(out, ["SpriteDraw", "DrawTexture"]);
    }
}
