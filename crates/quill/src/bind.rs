//! # Binding & Extraction
//! The write path ([`Binder`]) and read path ([`Extractor`]) between a record
//! and a prepared statement. Derived [`crate::Record`] implementations call
//! these once per field, in declaration order.

use crate::{
    column::Column,
    error::{Error, Result},
};
use rusqlite::{types::FromSqlError, Row, Statement};
use tracing::trace;

/// Writes record fields into the positional parameters of an insert.
pub struct Binder<'stmt, 'conn> {
    stmt: &'stmt mut Statement<'conn>,
    table: &'static str,
}

impl<'stmt, 'conn> Binder<'stmt, 'conn> {
    pub(crate) fn new(stmt: &'stmt mut Statement<'conn>, table: &'static str) -> Self {
        Self { stmt, table }
    }

    /// Bind field number `index` (0-based) to parameter `index + 1`.
    /// - Every parameter is rebound for each record, so no value from a
    ///   previous record survives a reset.
    pub fn bind<C: Column>(&mut self, index: usize, field: &'static str, value: &C) -> Result<()> {
        trace!(table = self.table, index, field, semantic = %C::SEMANTIC, "bind");
        let table = self.table;
        let bind_error = |source| Error::Bind {
            table,
            index,
            field,
            source,
        };
        let output = value.to_sql().map_err(bind_error)?;
        self.stmt
            .raw_bind_parameter(index + 1, output)
            .map_err(bind_error)
    }
}

/// Reads the columns of the row a query is positioned on.
pub struct Extractor<'row, 'stmt> {
    row: &'row Row<'stmt>,
    table: &'static str,
}

impl<'row, 'stmt> Extractor<'row, 'stmt> {
    pub(crate) fn new(row: &'row Row<'stmt>, table: &'static str) -> Self {
        Self { row, table }
    }

    /// Read column `index` (0-based) into an owned value.
    /// - The row's buffers are only valid until the next step, so text and
    ///   blobs are always copied out.
    pub fn get<C: Column>(&self, index: usize, field: &'static str) -> Result<C> {
        trace!(table = self.table, index, field, semantic = %C::SEMANTIC, "extract");
        let extract_error = |source| Error::Extract {
            table: self.table,
            index,
            field,
            source,
        };
        let value = self
            .row
            .get_ref(index)
            .map_err(|err| extract_error(FromSqlError::Other(Box::new(err))))?;
        C::from_sql(value).map_err(extract_error)
    }
}
