use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, WhereBounds};

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_(vc_reflect_path);
    let impls_ = crate::path::impls_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);

    let real_ident = meta.real_ident();
    let field_types = info.field_types();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(WhereBounds::FieldsAndClone, &field_types);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(::core::clone::Clone::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #impls_::struct_debug(self, f)
            }
        }
    }
}
