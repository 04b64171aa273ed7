//! Reference-counted handle to a state registered in a [`StateCtx`](crate::StateCtx).
//!
//! The UI runs on a single thread, so handles are `Rc` based. Borrow conflicts
//! are reported as [`Error::StateBorrowed`] instead of panicking.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::{Error, State};

/// Handle to a single shared instance of `T`.
///
/// Cloning the handle never clones `T`. Every write goes through
/// [`Shared::update`] or [`Shared::borrow_mut`].
pub struct Shared<T: State> {
    inner: Rc<RefCell<T>>,
}

impl<T: State> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: State> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("name", &T::NAME)
            .field("handles", &Rc::strong_count(&self.inner))
            .finish()
    }
}

impl<T: State> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Runs `f` with shared access to the state.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, Error> {
        let value = self.borrow()?;
        Ok(f(&value))
    }

    /// Runs `f` with exclusive access.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, Error> {
        let mut value = self.borrow_mut()?;
        Ok(f(&mut value))
    }

    pub fn borrow(&self) -> Result<Ref<'_, T>, Error> {
        self.inner
            .try_borrow()
            .map_err(|_borrowed| Error::state_borrowed(T::NAME, "read"))
    }

    pub fn borrow_mut(&self) -> Result<RefMut<'_, T>, Error> {
        self.inner
            .try_borrow_mut()
            .map_err(|_borrowed| Error::state_borrowed(T::NAME, "write"))
    }

    /// Returns `true` when both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
