use super::{OpKind, Value};

/// One deferred draw call: operation name plus marshaled arguments.
///
/// The [`OpKind`] tag is computed at construction so the flush path never
/// re-parses names.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCmd {
    name: String,
    op: OpKind,
    args: Vec<Value>,
}

impl RenderCmd {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        let name = name.into();
        let op = OpKind::classify(&name);
        Self { name, op, args }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn op(&self) -> OpKind {
        self.op
    }

    #[inline]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// First argument as a string: the drawable id for layer-aware ops, the
    /// texture id for texture draws.
    #[inline]
    pub fn first_str(&self) -> Option<&str> {
        self.args.first().and_then(Value::as_str)
    }
}
