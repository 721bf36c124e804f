use crate::state::FormState;
use database::DbError;
use thiserror::Error;

/// The two ways an action can fail.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Bad or missing input. The store was not touched.
    #[error("{}", .0.message)]
    Validation(FormState),

    /// The store rejected the operation.
    #[error("{}", .state.message)]
    Database {
        state: FormState,
        #[source]
        source: DbError,
    },
}

impl ActionError {
    pub fn state(&self) -> &FormState {
        match self {
            ActionError::Validation(state) => state,
            ActionError::Database { state, .. } => state,
        }
    }
}
