#![doc = include_str!("../README.md")]

pub mod attrs;
pub mod columns;
pub mod errors;
pub mod generate;
pub mod namer;
pub mod record;

use proc_macro2::TokenStream;
use proc_macro_error2::Diagnostic;
use std::collections::LinkedList;

/// Expand `#[derive(Record)]` for the provided item.
/// - Returns every diagnostic found, not just the first, so a user sees all
///   bad fields in one compile.
pub fn derive_record(input: TokenStream) -> Result<TokenStream, LinkedList<Diagnostic>> {
    let item = syn::parse2::<syn::DeriveInput>(input)
        .map_err(|err| LinkedList::from([errors::syn_error(err)]))?;
    let record = record::RecordDef::analyse(item)?;
    Ok(generate::generate(&record, &namer::CodeNamer::quill()))
}
