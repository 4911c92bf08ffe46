//! # Session errors
//! Every failure reported by SQLite is translated into one of these, carrying
//! enough context (SQL text, table, field) to find the offending call.

use rusqlite::types::FromSqlError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The database could not be opened.
    #[error("failed to open database '{path}' (status {code:?}): {source}")]
    Connection {
        path: String,
        code: Option<i32>,
        #[source]
        source: rusqlite::Error,
    },

    /// Direct execution of SQL text (DDL, transaction control, user SQL) failed.
    #[error("failed to execute `{sql}`: {message}")]
    Execution {
        sql: String,
        code: Option<i32>,
        message: String,
    },

    /// Generated (or caller supplied clause) SQL could not be compiled.
    #[error("failed to prepare `{sql}`: {source}")]
    Prepare {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A record field could not be bound to its parameter.
    #[error("failed to bind field {index} (`{field}`) of '{table}': {source}")]
    Bind {
        table: &'static str,
        index: usize,
        field: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// Stepping a statement failed, or produced a row where none was expected.
    #[error("failed to step `{sql}`: {source}")]
    Step {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A column of a fetched row could not be read as its field's type.
    #[error("failed to extract field {index} (`{field}`) of '{table}': {source}")]
    Extract {
        table: &'static str,
        index: usize,
        field: &'static str,
        #[source]
        source: FromSqlError,
    },

    /// Beginning, committing or rolling back a transaction failed.
    #[error("transaction failed: {source}")]
    Transaction {
        #[source]
        source: rusqlite::Error,
    },

    /// A declared column type has no storage class.
    #[error("unsupported column type `{declared}`")]
    UnsupportedType { declared: String },

    /// An existing table does not have the layout a record expects.
    #[error("table '{table}' does not match its record: {reason}")]
    SchemaMismatch { table: &'static str, reason: String },
}

/// The extended result code of an engine failure, if it came from the engine.
pub fn status_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => Some(failure.extended_code),
        rusqlite::Error::SqlInputError { error, .. } => Some(error.extended_code),
        _ => None,
    }
}

/// The engine's message for a failure, falling back to the error's display.
pub fn engine_message(err: &rusqlite::Error) -> String {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => message.clone(),
        rusqlite::Error::SqlInputError { msg, .. } => msg.clone(),
        other => other.to_string(),
    }
}

impl Error {
    pub(crate) fn connection(path: &str, source: rusqlite::Error) -> Self {
        Self::Connection {
            path: path.to_owned(),
            code: status_code(&source),
            source,
        }
    }

    pub(crate) fn execution(sql: &str, source: &rusqlite::Error) -> Self {
        Self::Execution {
            sql: sql.to_owned(),
            code: status_code(source),
            message: engine_message(source),
        }
    }

    pub(crate) fn prepare(sql: &str, source: rusqlite::Error) -> Self {
        Self::Prepare {
            sql: sql.to_owned(),
            source,
        }
    }

    pub(crate) fn step(sql: &str, source: rusqlite::Error) -> Self {
        Self::Step {
            sql: sql.to_owned(),
            source,
        }
    }

    /// The engine's extended result code, where the failure came from SQLite.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Connection { code, .. } | Self::Execution { code, .. } => *code,
            Self::Prepare { source, .. }
            | Self::Bind { source, .. }
            | Self::Step { source, .. }
            | Self::Transaction { source } => status_code(source),
            _ => None,
        }
    }
}
