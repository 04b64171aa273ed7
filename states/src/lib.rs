//! Shared state container used by the QrForge screens.
//!
//! Screens never own the state they render. A [`StateCtx`] is built once at
//! application start, every shared value is registered in it, and each screen
//! receives a [`Shared`] handle to the same instance. Writes through any handle
//! are visible to every other holder immediately.

mod ctx;
mod error;
mod shared;
mod state;
mod task;

pub use ctx::StateCtx;
pub use error::Error;
pub use shared::Shared;
pub use state::State;
pub use task::{TaskHandle, TaskId, TaskSlot};
