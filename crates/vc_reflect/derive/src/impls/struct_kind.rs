use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectStruct, WhereBounds};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(info);

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);

    let fields = info.fields();
    let field_names = fields.iter().map(|field| &field.name).collect::<Vec<_>>();
    let field_idents = fields.iter().map(|field| field.ident).collect::<Vec<_>>();
    let field_indices = (0..fields.len()).collect::<Vec<usize>>();
    let field_count = fields.len();

    let real_ident = meta.real_ident();
    let field_types = info.field_types();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(WhereBounds::FieldsAndClone, &field_types);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&mut self.#field_idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&mut self.#field_idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&'static str> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#field_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
