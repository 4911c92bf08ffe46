#![doc = include_str!("../README.md")]

extern crate self as quill;

pub mod bind;
pub mod column;
pub mod config;
pub mod error;
pub mod record;
pub mod session;
pub mod sql;
pub mod types;

pub use bind::{Binder, Extractor};
pub use column::Column;
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use record::Record;
pub use session::Session;
pub use sql::Clauses;
pub use types::{Blob, FieldDescriptor, SemanticType, StorageClass};

/// `#[derive(Record)]`
pub use quill_macro::Record;

pub mod gen {
    pub use quill_gen::*;
}

pub mod dependencies {
    pub use rusqlite;
}
