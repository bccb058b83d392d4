use folio_core::types::DbId;

/// Failure of a mutation engine operation.
///
/// `NotFound` is an expected outcome the caller maps to a "not found"
/// response. `Store` wraps any failure of the underlying database
/// (constraint violation, connectivity, timeout) and is already logged with
/// operation context by the engine that produced it.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl MutationError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        MutationError::NotFound { entity, id }
    }
}

/// Log a store failure once, with the entity, identity and attempted action.
///
/// `NotFound` is only traced at debug level.
pub(crate) fn traced<T>(
    result: Result<T, MutationError>,
    entity: &'static str,
    id: DbId,
    action: &'static str,
) -> Result<T, MutationError> {
    match &result {
        Err(MutationError::Store(err)) => {
            tracing::error!(entity, id, action, error = %err, "Store operation failed");
        }
        Err(MutationError::NotFound { .. }) => {
            tracing::debug!(entity, id, action, "Target row not found");
        }
        Ok(_) => {}
    }
    result
}
