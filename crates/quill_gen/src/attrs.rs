//! # `#[quill(..)]` attributes
//! - On the record: `#[quill(table = "name")]` overrides the table name.
//! - On a field: `#[quill(rename = "name")]` overrides the column name.

use crate::errors;
use proc_macro_error2::Diagnostic;
use std::collections::LinkedList;
use syn::{meta::ParseNestedMeta, Attribute, LitStr};

pub const ATTR_NAME: &str = "quill";

#[derive(Default)]
pub struct RecordAttrs {
    pub table: Option<LitStr>,
}

#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<LitStr>,
}

/// Parse `key = "value"` for a single allowed key, rejecting duplicates.
fn parse_string_key(
    meta: &ParseNestedMeta,
    key: &'static str,
    slot: &mut Option<LitStr>,
    errors: &mut LinkedList<Diagnostic>,
) -> syn::Result<()> {
    let value: LitStr = meta.value()?.parse()?;
    match slot {
        Some(prev) => errors.push_back(errors::attribute_redefined(
            key,
            value.span(),
            prev.span(),
        )),
        None => *slot = Some(value),
    }
    Ok(())
}

fn quill_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTR_NAME))
}

pub fn record_attrs(attrs: &[Attribute]) -> Result<RecordAttrs, LinkedList<Diagnostic>> {
    let mut parsed = RecordAttrs::default();
    let mut errors = LinkedList::new();
    for attr in quill_attrs(attrs) {
        let res = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                parse_string_key(&meta, "table", &mut parsed.table, &mut errors)
            } else {
                Err(meta.error("unsupported `quill` key on a record, expected `table`"))
            }
        });
        if let Err(err) = res {
            errors.push_back(errors::syn_error(err));
        }
    }
    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}

pub fn field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, LinkedList<Diagnostic>> {
    let mut parsed = FieldAttrs::default();
    let mut errors = LinkedList::new();
    for attr in quill_attrs(attrs) {
        let res = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                parse_string_key(&meta, "rename", &mut parsed.rename, &mut errors)
            } else {
                Err(meta.error("unsupported `quill` key on a field, expected `rename`"))
            }
        });
        if let Err(err) = res {
            errors.push_back(errors::syn_error(err));
        }
    }
    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}
