//! # Derive Error Messages
//! Diagnostics produced while analysing a record for `#[derive(Record)]`.
//! - Each error has a code (for easy communication/bug reports)

use proc_macro2::Span;
use proc_macro_error2::{Diagnostic, Level};
use syn::Ident;

type ErrCode = usize;

fn quill_error(code: ErrCode, span: Span, message: String) -> Diagnostic {
    Diagnostic::spanned(span, Level::Error, format!("[QUILL-{code}] {message}"))
}

pub fn not_a_struct(span: Span, kind: &str) -> Diagnostic {
    quill_error(
        0,
        span,
        format!("Records can only be derived for structs, not {kind}s"),
    )
    .help("Declare the record as `struct Name { field: Type, .. }`".to_string())
}

pub fn unnamed_fields(span: Span, name: &Ident) -> Diagnostic {
    quill_error(
        1,
        span,
        format!("Record `{name}` must have named fields to use as column names"),
    )
    .help(format!("Try `struct {name} {{ column: Type, .. }}`"))
}

pub fn no_fields(name: &Ident) -> Diagnostic {
    quill_error(
        2,
        name.span(),
        format!("Record `{name}` has no fields, so cannot be mapped to a table"),
    )
}

pub fn generic_record(span: Span, name: &Ident) -> Diagnostic {
    quill_error(
        3,
        span,
        format!("Record `{name}` cannot be generic, its table schema must be fixed"),
    )
}

pub fn unsupported_type(span: Span, ty: &str, reason: &str) -> Diagnostic {
    quill_error(4, span, format!("Unsupported column type `{ty}`: {reason}")).help(
        "Supported column types are i32, u32, i64, u64, f32, f64, String and Vec<u8>".to_string(),
    )
}

pub fn column_redefined(column: &str, def: Span, original_def: Span) -> Diagnostic {
    quill_error(5, def, format!("Redefinition of column `{column}`"))
        .span_note(original_def, "Originally defined here".to_string())
        .help("Each column of a record must have a unique name".to_string())
}

pub fn attribute_redefined(key: &str, def: Span, original_def: Span) -> Diagnostic {
    quill_error(6, def, format!("Duplicate `{key}` in `quill` attribute"))
        .span_note(original_def, "Originally set here".to_string())
}

pub fn invalid_name(span: Span, name: &str) -> Diagnostic {
    quill_error(
        7,
        span,
        format!("`{name}` is not a valid table or column name"),
    )
    .help("Names must start with a letter or `_` and contain only letters, digits and `_`".to_string())
}

pub fn reserved_name(span: Span, name: &str) -> Diagnostic {
    quill_error(
        7,
        span,
        format!("`{name}` is an SQL keyword and cannot be used as a column name"),
    )
    .help(format!(
        "Keep the field and rename its column with `#[quill(rename = \"{name}_\")]`"
    ))
}

pub fn syn_error(err: syn::Error) -> Diagnostic {
    quill_error(8, err.span(), err.to_string())
}
