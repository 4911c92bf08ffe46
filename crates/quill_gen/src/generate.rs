//! # `Record` implementation generation
//! Every field is visited in declaration order, so the descriptor, the bind
//! calls and the extraction all agree on column positions.

use crate::{
    namer::CodeNamer,
    record::{FieldDef, RecordDef},
};
use proc_macro2::TokenStream;
use quote::quote;

fn descriptors(fields: &[FieldDef], namer: &CodeNamer) -> Vec<TokenStream> {
    let descriptor = namer.struct_field_descriptor();
    let column_trait = namer.trait_column();
    fields
        .iter()
        .map(|FieldDef { column, ty, .. }| {
            quote! { #descriptor::new(#column, <#ty as #column_trait>::SEMANTIC) }
        })
        .collect()
}

fn binds(fields: &[FieldDef], namer: &CodeNamer) -> Vec<TokenStream> {
    let binder = namer.name_binder_arg();
    fields
        .iter()
        .enumerate()
        .map(|(index, FieldDef { ident, column, .. })| {
            quote! { #binder.bind(#index, #column, &self.#ident)?; }
        })
        .collect()
}

fn extracts(fields: &[FieldDef], namer: &CodeNamer) -> Vec<TokenStream> {
    let extractor = namer.name_extractor_arg();
    fields
        .iter()
        .enumerate()
        .map(|(index, FieldDef { ident, column, .. })| {
            quote! { #ident: #extractor.get(#index, #column)? }
        })
        .collect()
}

pub fn generate(record: &RecordDef, namer: &CodeNamer) -> TokenStream {
    let RecordDef {
        name,
        table,
        fields,
    } = record;

    let record_trait = namer.trait_record();
    let descriptor = namer.struct_field_descriptor();
    let binder_struct = namer.struct_binder();
    let extractor_struct = namer.struct_extractor();
    let result = namer.type_result();
    let binder = namer.name_binder_arg();
    let extractor = namer.name_extractor_arg();

    let descriptor_tks = descriptors(fields, namer);
    let bind_tks = binds(fields, namer);
    let extract_tks = extracts(fields, namer);

    quote! {
        #[automatically_derived]
        impl #record_trait for #name {
            const TABLE: &'static str = #table;
            const FIELDS: &'static [#descriptor] = &[ #(#descriptor_tks),* ];

            fn bind(&self, #binder: &mut #binder_struct<'_, '_>) -> #result<()> {
                #(#bind_tks)*
                ::core::result::Result::Ok(())
            }

            fn extract(#extractor: &#extractor_struct<'_, '_>) -> #result<Self> {
                ::core::result::Result::Ok(Self {
                    #(#extract_tks),*
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn render(item: syn::DeriveInput) -> String {
        let Ok(record) = RecordDef::analyse(item) else {
            panic!("valid record rejected")
        };
        let tokens = generate(&record, &CodeNamer::with_path(quote! { crate }));
        let file = syn::parse2::<syn::File>(tokens).expect("generated code parses as a file");
        prettyplease::unparse(&file)
    }

    #[test]
    fn positions_follow_declaration_order() {
        let out = render(parse_quote! {
            struct Person {
                id: i64,
                name: String,
                photo: Vec<u8>,
            }
        });
        assert!(out.contains(r#"const TABLE: &'static str = "Person";"#));
        assert!(out.contains(r#"binder.bind(0usize, "id", &self.id)?;"#));
        assert!(out.contains(r#"binder.bind(1usize, "name", &self.name)?;"#));
        assert!(out.contains(r#"binder.bind(2usize, "photo", &self.photo)?;"#));
        assert!(out.contains(r#"photo: extractor.get(2usize, "photo")?"#));
        assert!(out.find("\"id\"") < out.find("\"name\""));
    }

    #[test]
    fn renamed_column_keeps_member() {
        let out = render(parse_quote! {
            #[quill(table = "people")]
            struct Person {
                #[quill(rename = "full_name")]
                name: String,
            }
        });
        assert!(out.contains(r#"const TABLE: &'static str = "people";"#));
        assert!(out.contains(r#"binder.bind(0usize, "full_name", &self.name)?;"#));
        assert!(out.contains(r#"name: extractor.get(0usize, "full_name")?"#));
    }
}
