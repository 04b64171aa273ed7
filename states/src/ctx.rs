use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Error, Shared, State};

/// Registry of every shared state, keyed by type.
///
/// Built once at application start. Screens receive [`Shared`] handles from it
/// rather than reaching for ambient globals.
#[derive(Debug, Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn Any>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state` and returns a handle to it.
    ///
    /// Registering the same type twice replaces the stored handle; handles
    /// obtained earlier keep pointing at the old instance.
    pub fn add_state<T: State>(&mut self, state: T) -> Shared<T> {
        let shared = Shared::new(state);
        if self
            .storage
            .insert(TypeId::of::<T>(), Box::new(shared.clone()))
            .is_some()
        {
            log::warn!("State {} registered twice, replacing", T::NAME);
        }
        shared
    }

    pub fn shared<T: State>(&self) -> Result<Shared<T>, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<Shared<T>>())
            .cloned()
            .ok_or_else(|| Error::state_not_found(T::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Payload(String);

    impl State for Payload {
        const NAME: &'static str = "payload";
    }

    #[test]
    fn test_missing_state_is_reported_by_name() {
        let ctx = StateCtx::new();
        let err = ctx.shared::<Payload>().unwrap_err();
        assert_eq!(err.to_string(), "State not registered: payload");
    }

    #[test]
    fn test_add_then_lookup() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Payload("a".to_owned()));

        let handle = ctx.shared::<Payload>().expect("registered");
        assert_eq!(handle.read(|p| p.0.clone()).expect("readable"), "a");
    }

    #[test]
    fn test_registering_twice_replaces_the_stored_handle() {
        let mut ctx = StateCtx::new();
        let old = ctx.add_state(Payload("old".to_owned()));
        ctx.add_state(Payload("new".to_owned()));

        let current = ctx.shared::<Payload>().expect("registered");
        assert!(!current.ptr_eq(&old));
        assert_eq!(old.read(|p| p.0.clone()).expect("readable"), "old");
        assert_eq!(current.read(|p| p.0.clone()).expect("readable"), "new");
    }
}
