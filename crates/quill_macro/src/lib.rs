use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

/// Derive `quill::Record` for a struct with named fields.
/// - `#[quill(table = "..")]` overrides the table name.
/// - `#[quill(rename = "..")]` overrides a column name.
#[proc_macro_error]
#[proc_macro_derive(Record, attributes(quill))]
pub fn derive_record(tokens: TokenStream) -> TokenStream {
    match quill_gen::derive_record(tokens.into()) {
        Ok(ts) => ts.into(),
        Err(es) => {
            for e in es {
                e.emit();
            }
            TokenStream::new()
        }
    }
}
