//! # Semantic Types & Storage Classes
//! Record fields are typed with one of a fixed set of [`SemanticType`]s, each
//! of which maps to exactly one SQLite [`StorageClass`].
//!
//! | semantic type          | storage class | schema keyword |
//! |------------------------|---------------|----------------|
//! | `i32` `u32` `i64` `u64` | Integer       | `int`          |
//! | `f32` `f64`             | Real          | `float`        |
//! | `String`                | Text          | `text`         |
//! | [`Blob`]                | Blob          | `blob`         |

use crate::error::{Error, Result};
use std::fmt;

/// Binary data stored in a `blob` column.
pub type Blob = Vec<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Text,
    Blob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Integer,
    Real,
    Text,
    Blob,
}

impl SemanticType {
    pub const ALL: [SemanticType; 8] = [
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::Text,
        Self::Blob,
    ];

    pub const fn storage_class(self) -> StorageClass {
        match self {
            Self::I32 | Self::U32 | Self::I64 | Self::U64 => StorageClass::Integer,
            Self::F32 | Self::F64 => StorageClass::Real,
            Self::Text => StorageClass::Text,
            Self::Blob => StorageClass::Blob,
        }
    }

    /// The Rust type a field of this semantic type is declared as.
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Text => "String",
            Self::Blob => "Vec<u8>",
        }
    }
}

impl StorageClass {
    /// The column type used in `CREATE TABLE`.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Real => "float",
            Self::Text => "text",
            Self::Blob => "blob",
        }
    }

    /// Map a declared column type back to its storage class.
    /// - Only the keywords produced by [`StorageClass::keyword`] are accepted
    ///   (case insensitive), anything else is [`Error::UnsupportedType`].
    pub fn from_keyword(declared: &str) -> Result<Self> {
        match declared.trim().to_ascii_lowercase().as_str() {
            "int" => Ok(Self::Integer),
            "float" => Ok(Self::Real),
            "text" => Ok(Self::Text),
            "blob" => Ok(Self::Blob),
            _ => Err(Error::UnsupportedType {
                declared: declared.to_owned(),
            }),
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// A single column of a record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub semantic: SemanticType,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, semantic: SemanticType) -> Self {
        Self { name, semantic }
    }

    pub const fn storage_class(&self) -> StorageClass {
        self.semantic.storage_class()
    }
}
