//! Recording backend for compositor tests.

use crate::coords::{Camera2D, Camera3D, ColorRgba};
use crate::scene::RenderCmd;

use super::{DrawInvoker, FrameBackend};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    BeginFrame,
    Clear(ColorRgba),
    Begin2D(Camera2D),
    End2D,
    Begin3D(Camera3D),
    End3D,
    /// `name` or `name:first_arg`.
    Draw(String),
    EndFrame,
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub events: Vec<Event>,
    /// Operation names whose dispatch reports an error.
    pub fail_on: Vec<&'static str>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(names: &[&'static str]) -> Self {
        Self { events: Vec::new(), fail_on: names.to_vec() }
    }

    /// Dispatched draws in order, as `name` or `name:first_arg`.
    pub fn draws(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Draw(d) => Some(d.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Cameras passed to every 2D block, in order.
    pub fn cameras_2d(&self) -> Vec<Camera2D> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Begin2D(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl DrawInvoker for Recorder {
    fn invoke(&mut self, cmd: &RenderCmd) -> anyhow::Result<()> {
        let label = match cmd.first_str() {
            Some(arg) => format!("{}:{arg}", cmd.name()),
            None => cmd.name().to_owned(),
        };
        self.events.push(Event::Draw(label));
        if self.fail_on.iter().any(|n| *n == cmd.name()) {
            anyhow::bail!("{} rejected by test backend", cmd.name());
        }
        Ok(())
    }
}

impl FrameBackend for Recorder {
    fn begin_frame(&mut self) {
        self.events.push(Event::BeginFrame);
    }

    fn clear_background(&mut self, color: ColorRgba) {
        self.events.push(Event::Clear(color));
    }

    fn begin_mode_2d(&mut self, camera: &Camera2D) {
        self.events.push(Event::Begin2D(*camera));
    }

    fn end_mode_2d(&mut self) {
        self.events.push(Event::End2D);
    }

    fn begin_mode_3d(&mut self, camera: &Camera3D) {
        self.events.push(Event::Begin3D(*camera));
    }

    fn end_mode_3d(&mut self) {
        self.events.push(Event::End3D);
    }

    fn end_frame(&mut self) {
        self.events.push(Event::EndFrame);
    }
}
