use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Generates read accessors for every named field of a struct.
///
/// For a field `limit: usize` two methods are emitted:
/// `get_limit(&self) -> usize` (a clone of the field) and
/// `get_limit_ref(&self) -> &usize`.
#[proc_macro_derive(Getter)]
pub fn derive_getter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "Getter requires named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Getter can only be derived for structs")
                .to_compile_error()
                .into()
        }
    };

    let getters = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let ty = &field.ty;
        let getter = Ident::new(&format!("get_{}", field_name), Span::call_site());
        let getter_ref = Ident::new(&format!("get_{}_ref", field_name), Span::call_site());
        Some(quote! {
            #[allow(dead_code)]
            pub fn #getter(&self) -> #ty {
                ::std::clone::Clone::clone(&self.#field_name)
            }

            #[allow(dead_code)]
            pub fn #getter_ref(&self) -> &#ty {
                &self.#field_name
            }
        })
    });

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#getters)*
        }
    }
    .into()
}
