use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, WhereBounds};

/// Generate implementation code for `Typed`
///
/// The info is a `TypeInfo::Struct` whose fields follow declaration order.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let trait_typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);
    let named_field_ = crate::path::named_field_(vc_reflect_path);

    let fields = info.fields().iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        quote! {
            #named_field_::new::<#ty>(#name)
        }
    });

    let type_info_tokens = quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields,)*
        ]))
    };

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let real_ident = meta.real_ident();
    let field_types = info.field_types();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(WhereBounds::Fields, &field_types);

    quote! {
        impl #impl_generics #trait_typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
