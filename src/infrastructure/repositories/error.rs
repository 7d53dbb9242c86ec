use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";

/// Storage faults are passed through as `Persistence`. The one exception is a
/// unique-constraint violation, which the service treats as duplicate content.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let detail = db_err
                    .constraint()
                    .map(|name| format!("unique constraint violated: {name}"))
                    .unwrap_or_else(|| "unique constraint violated".into());
                return DomainError::Conflict(detail);
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
