use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not registered: {name}")]
    StateNotFound { name: &'static str },
    #[error("State {name} is already borrowed, context: {context}")]
    StateBorrowed {
        name: &'static str,
        context: &'static str,
    },
}

impl Error {
    pub fn state_not_found(name: &'static str) -> Self {
        Self::StateNotFound { name }
    }

    pub fn state_borrowed(name: &'static str, context: &'static str) -> Self {
        Self::StateBorrowed { name, context }
    }
}
