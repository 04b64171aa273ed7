//! Cancellable task handles bound to a screen's lifetime.
//!
//! A [`TaskSlot`] owns at most one running task per purpose (for example the
//! scanner's indicator loop). Starting a new task cancels the previous one, so
//! a screen can restart its work on every `OnEnter` without leaking loops.
//! Cancellation is cooperative: the task awaits
//! [`CancellationToken::cancelled`] alongside its own work.
//!
//! ```ignore
//! let mut slot = TaskSlot::default();
//! let handle = slot.start::<ScanIndicator>();
//! runtime.spawn(run_indicator(handle.cancellation_token(), period, |_| {}));
//!
//! // leaving the screen
//! slot.cancel();
//! ```

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies a task by the type that owns it and a generation counter.
///
/// Two tasks started from the same slot share the `TypeId` and differ in
/// generation, which lets a late result from a cancelled task be told apart
/// from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A task's id plus the token used to stop it.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Token to hand to the async side of the task.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Holds the single live task for one purpose.
#[derive(Debug, Default)]
pub struct TaskSlot {
    generation: u64,
    current: Option<TaskHandle>,
}

impl TaskSlot {
    /// Cancels any running task and issues a handle for a new one owned by `T`.
    pub fn start<T: 'static>(&mut self) -> TaskHandle {
        self.cancel();
        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<T>(), self.generation),
            CancellationToken::new(),
        );
        self.current = Some(handle.clone());
        handle
    }

    /// Cancels the running task, if any. Calling it twice is harmless.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            log::debug!("Cancelling task generation {}", handle.id().generation());
            handle.cancel();
        }
    }

    pub fn current(&self) -> Option<&TaskHandle> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_cancelled())
    }
}
