use crate::domain::errors::{DomainError, FieldErrors};

const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_BUSY: &str = "5";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("post not found".into()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(SQLITE_CONSTRAINT_NOTNULL) => {
                DomainError::Validation(not_null_violation(db_err.message()))
            }
            Some(SQLITE_BUSY) => DomainError::Persistence("database is busy, retry later".into()),
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn not_null_violation(message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    // SQLite reports "NOT NULL constraint failed: posts.<column>".
    let field = message
        .rsplit('.')
        .next()
        .filter(|column| !column.is_empty())
        .unwrap_or("unknown");
    errors.insert(field, format!("{field} is required"));
    errors
}
