use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, Type};

use super::ReflectMeta;

/// A named field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Name used in type info and by the `Struct` accessors.
    pub name: String,
}

/// Parsed input of `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Validates the input shape and collects the fields in declaration order.
    pub fn from_input(input: &'a DeriveInput) -> Result<Self, syn::Error> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let named = match &data.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "`Reflect` can only be derived for structs with named fields",
                ));
            }
        };

        for param in &input.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(_) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "`Reflect` types must be 'static, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(_) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "const parameters are not supported by `#[derive(Reflect)]`",
                    ));
                }
            }
        }

        let fields = named
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                Some(StructField {
                    ident,
                    ty: &field.ty,
                    name: unraw(ident),
                })
            })
            .collect();

        Ok(Self {
            meta: ReflectMeta::new(&input.ident, &input.generics),
            fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    pub fn field_types(&self) -> Vec<&'a Type> {
        self.fields.iter().map(|field| field.ty).collect()
    }
}

// `r#type` is exposed as `type`.
fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}
