use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Names used by generated code, kept in one place so the runtime crate can
/// be moved or re-exported without touching the generators.
pub struct CodeNamer {
    quill_path: TokenStream,
}

impl CodeNamer {
    pub fn quill() -> Self {
        Self {
            quill_path: quote! { ::quill },
        }
    }

    pub fn with_path(quill_path: TokenStream) -> Self {
        Self { quill_path }
    }

    pub fn quill_path(&self) -> &TokenStream {
        &self.quill_path
    }

    pub fn trait_record(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::Record }
    }

    pub fn trait_column(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::Column }
    }

    pub fn struct_field_descriptor(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::FieldDescriptor }
    }

    pub fn struct_binder(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::Binder }
    }

    pub fn struct_extractor(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::Extractor }
    }

    pub fn type_result(&self) -> TokenStream {
        let quill = &self.quill_path;
        quote! { #quill::Result }
    }

    pub fn name_binder_arg(&self) -> Ident {
        Ident::new("binder", Span::call_site())
    }

    pub fn name_extractor_arg(&self) -> Ident {
        Ident::new("extractor", Span::call_site())
    }
}
