use super::{QueueKind, RenderCmd, RenderTypes, Value};

/// Contents of the three queues taken out by [`RenderQueue::drain`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrainedQueues {
    pub scene_2d: Vec<RenderCmd>,
    pub scene_3d: Vec<RenderCmd>,
    pub gui: Vec<RenderCmd>,
}

impl DrainedQueues {
    #[inline]
    pub fn len(&self) -> usize {
        self.scene_2d.len() + self.scene_3d.len() + self.gui.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deferred draw commands recorded during one frame.
///
/// Performance characteristics:
/// - `enqueue()` is O(1) amortized
/// - buffers handed back through [`RenderQueue::recycle`] are reused, so a warmed
///   queue stops allocating per frame
#[derive(Debug, Default)]
pub struct RenderQueue {
    scene_2d: Vec<RenderCmd>,
    scene_3d: Vec<RenderCmd>,
    gui: Vec<RenderCmd>,
}

impl RenderQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to the queue for `kind`. Never fails; unknown names
    /// only fail later, at dispatch.
    pub fn enqueue(&mut self, kind: QueueKind, name: impl Into<String>, args: Vec<Value>) {
        self.queue_mut(kind).push(RenderCmd::new(name, args));
    }

    /// Classifies `name` through `types` and enqueues it.
    ///
    /// Returns `false`, queueing nothing, when the name is not registered.
    pub fn submit(&mut self, types: &RenderTypes, name: &str, args: Vec<Value>) -> bool {
        match types.classify(name) {
            Some(kind) => {
                self.enqueue(kind, name, args);
                true
            }
            None => false,
        }
    }

    /// Commands queued so far for `kind`, in enqueue order.
    #[inline]
    pub fn commands(&self, kind: QueueKind) -> &[RenderCmd] {
        match kind {
            QueueKind::Scene2D => &self.scene_2d,
            QueueKind::Scene3D => &self.scene_3d,
            QueueKind::Gui => &self.gui,
        }
    }

    #[inline]
    fn queue_mut(&mut self, kind: QueueKind) -> &mut Vec<RenderCmd> {
        match kind {
            QueueKind::Scene2D => &mut self.scene_2d,
            QueueKind::Scene3D => &mut self.scene_3d,
            QueueKind::Gui => &mut self.gui,
        }
    }

    /// Discards every pending command. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.scene_2d.clear();
        self.scene_3d.clear();
        self.gui.clear();
    }

    /// Takes all three queues, leaving them empty.
    pub fn drain(&mut self) -> DrainedQueues {
        DrainedQueues {
            scene_2d: std::mem::take(&mut self.scene_2d),
            scene_3d: std::mem::take(&mut self.scene_3d),
            gui: std::mem::take(&mut self.gui),
        }
    }

    /// Returns drained buffers for reuse by the next frame.
    ///
    /// A queue that received commands since the drain keeps its own buffer.
    pub fn recycle(&mut self, drained: DrainedQueues) {
        fn reuse(slot: &mut Vec<RenderCmd>, mut buf: Vec<RenderCmd>) {
            if slot.is_empty() && buf.capacity() > slot.capacity() {
                buf.clear();
                *slot = buf;
            }
        }
        reuse(&mut self.scene_2d, drained.scene_2d);
        reuse(&mut self.scene_3d, drained.scene_3d);
        reuse(&mut self.gui, drained.gui);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scene_2d.len() + self.scene_3d.len() + self.gui.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn capacity(&self, kind: QueueKind) -> usize {
        match kind {
            QueueKind::Scene2D => self.scene_2d.capacity(),
            QueueKind::Scene3D => self.scene_3d.capacity(),
            QueueKind::Gui => self.gui.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cmds: &[RenderCmd]) -> Vec<&str> {
        cmds.iter().map(RenderCmd::name).collect()
    }

    #[test]
    fn enqueue_routes_by_kind_in_order() {
        let mut q = RenderQueue::new();
        q.enqueue(QueueKind::Scene2D, "DrawRectangle", vec![]);
        q.enqueue(QueueKind::Gui, "GuiLabel", vec![]);
        q.enqueue(QueueKind::Scene2D, "DrawCircle", vec![]);
        q.enqueue(QueueKind::Scene3D, "DrawCube", vec![]);

        let d = q.drain();
        assert_eq!(names(&d.scene_2d), ["DrawRectangle", "DrawCircle"]);
        assert_eq!(names(&d.scene_3d), ["DrawCube"]);
        assert_eq!(names(&d.gui), ["GuiLabel"]);
    }

    #[test]
    fn submit_skips_unclassified_names() {
        let types = RenderTypes::builtin();
        let mut q = RenderQueue::new();
        assert!(q.submit(&types, "DrawModel", vec![Value::from("model_1")]));
        assert!(!q.submit(&types, "LoadTexture", vec![]));
        assert_eq!(q.len(), 1);
        assert_eq!(q.commands(QueueKind::Scene3D)[0].first_str(), Some("model_1"));
    }

    #[test]
    fn second_drain_is_empty() {
        let mut q = RenderQueue::new();
        q.enqueue(QueueKind::Scene2D, "DrawPixel", vec![]);
        assert_eq!(q.drain().len(), 1);
        assert!(q.drain().is_empty());
    }

    #[test]
    fn clear_discards_all_queues() {
        let mut q = RenderQueue::new();
        q.enqueue(QueueKind::Scene2D, "DrawPixel", vec![]);
        q.enqueue(QueueKind::Gui, "GuiPanel", vec![]);
        q.clear();
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }

    #[test]
    fn recycle_reuses_capacity_without_replaying_commands() {
        let mut q = RenderQueue::new();
        for _ in 0..16 {
            q.enqueue(QueueKind::Scene2D, "DrawPixel", vec![]);
        }
        let drained = q.drain();
        assert_eq!(q.capacity(QueueKind::Scene2D), 0);
        q.recycle(drained);
        assert!(q.is_empty());
        assert!(q.capacity(QueueKind::Scene2D) >= 16);
    }

    #[test]
    fn recycle_keeps_commands_enqueued_after_drain() {
        let mut q = RenderQueue::new();
        q.enqueue(QueueKind::Gui, "GuiLabel", vec![]);
        let drained = q.drain();
        q.enqueue(QueueKind::Gui, "GuiButton", vec![]);
        q.recycle(drained);
        assert_eq!(names(q.commands(QueueKind::Gui)), ["GuiButton"]);
    }
}
