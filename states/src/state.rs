use std::any::Any;

/// A value that lives in a [`StateCtx`](crate::StateCtx) and is shared between screens.
pub trait State: Any {
    /// Name used in logs and lookup errors.
    const NAME: &'static str;
}
