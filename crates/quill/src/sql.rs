//! # Statement Builder
//! Composes the SQL text for a record's table.
//! - Table names are single quoted, column names are bare. The derive only
//!   accepts identifier characters in either, and rejects SQL keywords as
//!   column names, so neither is escaped.
//! - Clause fragments from [`Clauses`] are inserted verbatim. They are not
//!   escaped or validated, callers own their safety.

use crate::types::FieldDescriptor;
use std::fmt::Write;

/// Optional raw clauses for a `SELECT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses<'a> {
    pub filter: Option<&'a str>,
    pub group_by: Option<&'a str>,
    pub order_by: Option<&'a str>,
}

impl<'a> Clauses<'a> {
    pub const fn new() -> Self {
        Self {
            filter: None,
            group_by: None,
            order_by: None,
        }
    }

    /// Select every row.
    pub const fn all() -> Self {
        Self::new()
    }

    /// The `WHERE` clause.
    pub fn filter(mut self, clause: &'a str) -> Self {
        self.filter = Some(clause);
        self
    }

    pub fn group_by(mut self, clause: &'a str) -> Self {
        self.group_by = Some(clause);
        self
    }

    pub fn order_by(mut self, clause: &'a str) -> Self {
        self.order_by = Some(clause);
        self
    }
}

pub fn create_table_sql(table: &str, fields: &[FieldDescriptor]) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS '{table}' (\n");
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            sql.push_str(",\n");
        }
        let _ = write!(sql, "{} {}", field.name, field.storage_class().keyword());
    }
    sql.push_str("\n);");
    sql
}

pub fn insert_sql(table: &str, field_count: usize) -> String {
    debug_assert!(field_count > 0, "records always have at least one field");
    let placeholders = vec!["?"; field_count].join(",");
    format!("INSERT INTO '{table}' VALUES ({placeholders});")
}

pub fn select_sql(table: &str, clauses: &Clauses<'_>) -> String {
    let mut sql = format!("SELECT * FROM '{table}'");
    let parts = [
        ("WHERE", clauses.filter),
        ("GROUP BY", clauses.group_by),
        ("ORDER BY", clauses.order_by),
    ];
    for (keyword, clause) in parts {
        if let Some(clause) = clause {
            let _ = write!(sql, "\n{keyword} {clause}");
        }
    }
    sql.push(';');
    sql
}

pub(crate) fn table_exists_sql() -> &'static str {
    "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;"
}

pub(crate) fn table_info_sql(table: &str) -> String {
    format!("PRAGMA table_info('{table}');")
}
