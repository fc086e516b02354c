//! Shared Diesel error mapping for the repositories in this module.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into repository query or connection errors.
///
/// Driver messages are logged at debug level and never copied into the
/// returned error.
pub(super) fn map_diesel_error<E>(
    error: diesel::result::Error,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            query("referenced user does not exist")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DefinitionRepositoryError;
    use rstest::rstest;

    fn map(error: diesel::result::Error) -> DefinitionRepositoryError {
        map_diesel_error(
            error,
            DefinitionRepositoryError::query,
            DefinitionRepositoryError::connection,
        )
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(
            PoolError::checkout("connection refused"),
            DefinitionRepositoryError::connection,
        );

        assert!(matches!(mapped, DefinitionRepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        let mapped = map(diesel::result::Error::NotFound);

        assert!(matches!(mapped, DefinitionRepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }

    #[rstest]
    fn rollback_is_a_generic_query_error() {
        let mapped = map(diesel::result::Error::RollbackTransaction);

        assert!(matches!(mapped, DefinitionRepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("database error"));
    }
}
