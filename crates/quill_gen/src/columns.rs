//! # Column type screening
//! The derive cannot resolve types, so the real check that a field is
//! storable is the `quill::Column` bound in the generated code. This catches
//! the common mistakes early, with a span on the offending field.

use crate::errors;
use proc_macro_error2::Diagnostic;
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Primitive names with no storage class.
const UNSUPPORTED_PRIMITIVES: &[(&str, &str)] = &[
    ("bool", "store flags as an integer column"),
    ("i8", "only 32 and 64 bit integers are stored"),
    ("i16", "only 32 and 64 bit integers are stored"),
    ("u8", "only 32 and 64 bit integers are stored"),
    ("u16", "only 32 and 64 bit integers are stored"),
    ("i128", "integers wider than 64 bits do not fit an integer column"),
    ("u128", "integers wider than 64 bits do not fit an integer column"),
    ("isize", "platform sized integers have no fixed column width"),
    ("usize", "platform sized integers have no fixed column width"),
    ("char", "store characters as a `String`"),
    ("str", "records must own their text, use `String`"),
    ("Option", "columns are never NULL"),
];

fn unsupported(ty: &Type, reason: &str) -> Diagnostic {
    let ty_str = ty.to_token_stream().to_string();
    errors::unsupported_type(syn::spanned::Spanned::span(ty), &ty_str, reason)
}

fn check_path(ty: &Type, TypePath { qself, path }: &TypePath) -> Result<(), Diagnostic> {
    if qself.is_some() {
        return Ok(());
    }
    let Some(last) = path.segments.last() else {
        return Ok(());
    };
    let name = last.ident.to_string();
    if let Some((_, reason)) = UNSUPPORTED_PRIMITIVES.iter().find(|(prim, _)| *prim == name) {
        return Err(unsupported(ty, reason));
    }
    if name == "Vec" {
        if let PathArguments::AngleBracketed(args) = &last.arguments {
            let is_bytes = matches!(
                args.args.first(),
                Some(GenericArgument::Type(Type::Path(inner)))
                    if args.args.len() == 1 && inner.path.is_ident("u8")
            );
            if !is_bytes {
                return Err(unsupported(ty, "only `Vec<u8>` is stored, as a blob"));
            }
        }
    }
    Ok(())
}

/// Reject field types that can never implement `quill::Column`.
pub fn check_column_type(ty: &Type) -> Result<(), Diagnostic> {
    match ty {
        Type::Path(path) => check_path(ty, path),
        Type::Paren(inner) => check_column_type(&inner.elem),
        Type::Group(inner) => check_column_type(&inner.elem),
        Type::Reference(_) | Type::Ptr(_) => {
            Err(unsupported(ty, "records must own their values"))
        }
        Type::Tuple(_) | Type::Array(_) | Type::Slice(_) => {
            Err(unsupported(ty, "each column holds a single value"))
        }
        Type::Macro(_) => Ok(()),
        _ => Err(unsupported(ty, "not a concrete storable type")),
    }
}
