//! # Sessions
//! A [`Session`] owns one SQLite connection and runs every record operation
//! to completion on the calling thread.
//! - Statements are prepared per call and dropped (finalized) before the call
//!   returns, on success and on every error path.
//! - SQL text is built per call, there is no shared buffer.

use crate::{
    bind::{Binder, Extractor},
    config::SessionConfig,
    error::{Error, Result},
    record::Record,
    sql::{self, Clauses},
    types::StorageClass,
};
use rusqlite::{Connection, Statement};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Session {
    conn: Connection,
    path: String,
}

fn prepare<'conn>(conn: &'conn Connection, sql: &str) -> Result<Statement<'conn>> {
    debug!(%sql, "prepare");
    conn.prepare(sql).map_err(|source| Error::prepare(sql, source))
}

/// Bind and step a record on an insert statement.
/// - The statement is reset after the step, ready for the next record.
fn insert_one<T: Record>(stmt: &mut Statement<'_>, sql: &str, record: &T) -> Result<()> {
    record.bind(&mut Binder::new(stmt, T::TABLE))?;
    stmt.raw_execute()
        .map(|_| ())
        .map_err(|source| Error::step(sql, source))
}

fn insert_each<T: Record>(conn: &Connection, sql: &str, records: &[T]) -> Result<()> {
    let mut stmt = prepare(conn, sql)?;
    for (index, record) in records.iter().enumerate() {
        insert_one(&mut stmt, sql, record).inspect_err(|err| {
            warn!(table = T::TABLE, index, %err, "batch insert failed");
        })?;
    }
    Ok(())
}

impl Session {
    /// Open (creating if needed) the database at `path`.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        Self::connect_with(path, &SessionConfig::default())
    }

    pub fn connect_with(path: impl AsRef<Path>, config: &SessionConfig) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().into_owned();
        let conn = Connection::open_with_flags(path, config.open_flags())
            .map_err(|source| Error::connection(&path_str, source))?;
        if let Some(timeout) = config.busy_timeout {
            conn.busy_timeout(timeout)
                .map_err(|source| Error::connection(&path_str, source))?;
        }
        debug!(path = %path_str, ?config, "opened session");
        Ok(Self {
            conn,
            path: path_str,
        })
    }

    /// A private database that is discarded when the session is dropped.
    pub fn connect_in_memory() -> Result<Self> {
        let path = String::from(":memory:");
        let conn =
            Connection::open_in_memory().map_err(|source| Error::connection(&path, source))?;
        debug!(%path, "opened session");
        Ok(Self { conn, path })
    }

    /// The path this session was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Close the connection, reporting any failure the engine has in doing so.
    /// Dropping a session also closes it, but ignores such failures.
    pub fn close(self) -> Result<()> {
        let Self { conn, path } = self;
        debug!(%path, "closing session");
        conn.close()
            .map_err(|(_, source)| Error::connection(&path, source))
    }

    /// Execute raw SQL (any number of statements, no parameters).
    pub fn exec(&self, sql: &str) -> Result<()> {
        debug!(%sql, "exec");
        self.conn
            .execute_batch(sql)
            .map_err(|source| Error::execution(sql, &source))
    }

    /// Create the table for `T`, doing nothing if it already exists.
    pub fn create_table<T: Record>(&self) -> Result<()> {
        self.exec(&sql::create_table_sql(T::TABLE, T::FIELDS))
    }

    pub fn insert<T: Record>(&self, record: &T) -> Result<()> {
        let sql = sql::insert_sql(T::TABLE, T::FIELDS.len());
        let mut stmt = prepare(&self.conn, &sql)?;
        insert_one(&mut stmt, &sql, record)
    }

    /// Insert all records in a single transaction, preparing the insert once.
    /// - All or nothing: if any record fails to bind or step, the transaction
    ///   is rolled back and none of `records` are stored.
    pub fn insert_batch<T: Record>(&mut self, records: &[T]) -> Result<()> {
        let sql = sql::insert_sql(T::TABLE, T::FIELDS.len());
        debug!(table = T::TABLE, count = records.len(), "begin batch insert");
        let tx = self
            .conn
            .transaction()
            .map_err(|source| Error::Transaction { source })?;
        match insert_each(&tx, &sql, records) {
            Ok(()) => tx.commit().map_err(|source| Error::Transaction { source }),
            Err(err) => {
                if let Err(source) = tx.rollback() {
                    warn!(table = T::TABLE, %source, "rollback failed");
                } else {
                    warn!(table = T::TABLE, "batch insert rolled back");
                }
                Err(err)
            }
        }
    }

    /// Append every row of `T`'s table matching `clauses` to `out`, in the
    /// order the engine returns them, and return how many were appended.
    /// - On error `out` is left as it was.
    pub fn query<T: Record>(&self, out: &mut Vec<T>, clauses: &Clauses<'_>) -> Result<usize> {
        let sql = sql::select_sql(T::TABLE, clauses);
        let mut stmt = prepare(&self.conn, &sql)?;
        let before = out.len();
        let mut rows = stmt.raw_query();
        let fetched = loop {
            match rows.next() {
                Ok(Some(row)) => match T::extract(&Extractor::new(row, T::TABLE)) {
                    Ok(record) => out.push(record),
                    Err(err) => break Err(err),
                },
                Ok(None) => break Ok(out.len() - before),
                Err(source) => break Err(Error::step(&sql, source)),
            }
        };
        if fetched.is_err() {
            out.truncate(before);
        }
        fetched
    }

    /// Collect the rows of `T`'s table matching `clauses`.
    pub fn fetch<T: Record>(&self, clauses: &Clauses<'_>) -> Result<Vec<T>> {
        let mut out = Vec::new();
        self.query(&mut out, clauses)?;
        Ok(out)
    }

    pub fn table_exists<T: Record>(&self) -> Result<bool> {
        let sql = sql::table_exists_sql();
        let mut stmt = prepare(&self.conn, sql)?;
        let count: i64 = stmt
            .query_row([T::TABLE], |row| row.get(0))
            .map_err(|source| Error::step(sql, source))?;
        Ok(count > 0)
    }

    /// Check an existing table has exactly the columns of `T`, in order and
    /// with matching storage classes.
    pub fn verify_table<T: Record>(&self) -> Result<()> {
        let sql = sql::table_info_sql(T::TABLE);
        let mut stmt = prepare(&self.conn, &sql)?;
        let mut rows = stmt.raw_query();
        let mut columns: Vec<(String, String)> = Vec::new();
        while let Some(row) = rows.next().map_err(|source| Error::step(&sql, source))? {
            let name: String = row.get(1).map_err(|source| Error::step(&sql, source))?;
            let declared: String = row.get(2).map_err(|source| Error::step(&sql, source))?;
            columns.push((name, declared));
        }

        let mismatch = |reason: String| Error::SchemaMismatch {
            table: T::TABLE,
            reason,
        };
        if columns.is_empty() {
            return Err(mismatch(String::from("table does not exist")));
        }
        if columns.len() != T::FIELDS.len() {
            return Err(mismatch(format!(
                "expected {} columns, found {}",
                T::FIELDS.len(),
                columns.len()
            )));
        }
        for (index, (field, (name, declared))) in T::FIELDS.iter().zip(&columns).enumerate() {
            if field.name != name.as_str() {
                return Err(mismatch(format!(
                    "column {index} is `{name}`, expected `{}`",
                    field.name
                )));
            }
            let class = StorageClass::from_keyword(declared)?;
            if class != field.storage_class() {
                return Err(mismatch(format!(
                    "column `{name}` is {class}, expected {}",
                    field.storage_class()
                )));
            }
        }
        Ok(())
    }
}
