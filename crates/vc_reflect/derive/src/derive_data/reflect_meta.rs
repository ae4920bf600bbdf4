use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

/// Type level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("ident", &self.ident)
            .field("generics", &self.generics)
            .finish()
    }
}

/// Which extra predicates [`ReflectMeta::split_generics`] appends.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum WhereBounds {
    /// Type parameters are `TypePath`.
    TypePath,
    /// Additionally, every field type is `Reflect + Typed`.
    Fields,
    /// Additionally, the type itself is `Clone`.
    FieldsAndClone,
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_reflect_path: crate::path::vc_reflect(),
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    /// Whether the type has type parameters, so its type info and paths
    /// must be cached per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Type path expression.
    ///
    /// Non-generic types produce a `&'static str` constant, generic types an
    /// owned `String` built from the paths of their parameters.
    pub fn type_path_tokens(&self) -> TokenStream {
        let ident = self.ident.to_string();
        if !self.impl_with_generic() {
            return quote! {
                ::core::concat!(::core::module_path!(), "::", #ident)
            };
        }

        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        let params = self.param_parts(|param| quote!(<#param as #type_path_>::type_path()));
        let impls_ = crate::path::impls_(&self.vc_reflect_path);
        quote! {
            #impls_::concat(&[::core::module_path!(), "::", #ident, "<", #params ">"])
        }
    }

    /// Type name expression, see [`type_path_tokens`](Self::type_path_tokens).
    pub fn type_name_tokens(&self) -> TokenStream {
        let ident = self.ident.to_string();
        if !self.impl_with_generic() {
            return quote!(#ident);
        }

        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        let params = self.param_parts(|param| quote!(<#param as #type_path_>::type_name()));
        let impls_ = crate::path::impls_(&self.vc_reflect_path);
        quote! {
            #impls_::concat(&[#ident, "<", #params ">"])
        }
    }

    // `A::x(), ", ", B::x(),` with a trailing comma.
    fn param_parts(&self, part: impl Fn(&Ident) -> TokenStream) -> TokenStream {
        let mut tokens = TokenStream::new();
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                tokens.extend(quote!(", ",));
            }
            let expr = part(&param.ident);
            tokens.extend(quote!(#expr,));
        }
        tokens
    }

    /// Splits the generics for an impl block, appending the predicates
    /// selected by `bounds` to the where clause.
    pub fn split_generics(
        &self,
        bounds: WhereBounds,
        field_types: &[&Type],
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let vc_reflect_path = &self.vc_reflect_path;
        let type_path_ = crate::path::type_path_(vc_reflect_path);
        let reflect_ = crate::path::reflect_(vc_reflect_path);
        let typed_ = crate::path::typed_(vc_reflect_path);

        let mut predicates = Vec::new();
        if let Some(where_clause) = where_clause {
            predicates.extend(where_clause.predicates.iter().map(|p| quote!(#p)));
        }
        for param in self.generics.type_params() {
            let ident = &param.ident;
            predicates.push(quote!(#ident: #type_path_));
        }
        // Concrete field types need no predicate, and bounds on them would only
        // turn a missing impl into a less readable error.
        if bounds != WhereBounds::TypePath && self.impl_with_generic() {
            for ty in field_types {
                predicates.push(quote!(#ty: #reflect_ + #typed_));
            }
        }
        if bounds == WhereBounds::FieldsAndClone {
            let ident = self.ident;
            predicates.push(quote!(#ident #ty_generics: ::core::clone::Clone));
        }

        let where_tokens = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote!(where #(#predicates,)*)
        };

        (impl_generics, ty_generics, where_tokens)
    }
}
