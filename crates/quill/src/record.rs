//! # Records
//! A record is a struct mapped to one table: its name is the table name, and
//! its fields (in declaration order) are the columns.
//!
//! Implement with `#[derive(Record)]`:
//! ```
//! use quill::{Blob, Record};
//!
//! #[derive(Record)]
//! struct Sample {
//!     id: i64,
//!     label: String,
//!     weight: f32,
//!     raw: Blob,
//! }
//!
//! assert_eq!(Sample::TABLE, "Sample");
//! let names: Vec<_> = Sample::FIELDS.iter().map(|f| f.name).collect();
//! assert_eq!(names, ["id", "label", "weight", "raw"]);
//! ```
//!
//! ## Unsupported records
//! Field types outside the supported set are rejected when the record is
//! compiled, never mapped to a default column type.
//! ```compile_fail
//! #[derive(quill::Record)]
//! struct Flags {
//!     enabled: bool,
//! }
//! ```
//!
//! Types the derive cannot see through are rejected by the [`crate::Column`]
//! bound instead.
//! ```compile_fail
//! struct Point(i32, i32);
//!
//! #[derive(quill::Record)]
//! struct Shape {
//!     origin: Point,
//! }
//! ```
//!
//! Column names are written unquoted, so SQL keywords are rejected.
//! ```compile_fail
//! #[derive(quill::Record)]
//! struct Task {
//!     order: i64,
//! }
//! ```
//!
//! A record must have at least one field.
//! ```compile_fail
//! #[derive(quill::Record)]
//! struct Nothing {}
//! ```

use crate::{
    bind::{Binder, Extractor},
    error::Result,
    types::FieldDescriptor,
};

pub trait Record: Sized {
    /// The table this record is stored in.
    const TABLE: &'static str;

    /// The columns of the table, in declaration order.
    /// - Never empty.
    const FIELDS: &'static [FieldDescriptor];

    /// Bind every field to the parameter at its position.
    fn bind(&self, binder: &mut Binder<'_, '_>) -> Result<()>;

    /// Construct a record from the row the extractor is positioned on.
    fn extract(extractor: &Extractor<'_, '_>) -> Result<Self>;
}
