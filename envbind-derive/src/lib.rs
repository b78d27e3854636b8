//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Check whether a type is `Option<T>`
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false)
    } else {
        false
    }
}

/// `EnvSchema` derive macro
///
/// Implements `envbind::EnvSchema` and adds `load(&LoadConfig)` and
/// `from_env()` constructors.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all keys
///
/// **Field-level**:
/// - `#[env(key = "CUSTOM_NAME")]`: Custom key
/// - `#[env(required)]`: Fail when the key is absent or blank
/// - `#[env(default)]`: Use `Default::default()` when no value resolves
/// - `#[env(default = value)]`: Use explicit default value when no value resolves
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvSchema, attributes(env))]
pub fn derive_env_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvSchema only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvSchema only supports structs",
            ));
        }
    };

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "EnvSchema requires at least one field",
        ));
    }

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut initializers = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let field_type = &field.ty;
        let attrs = FieldAttrs::from_field(field)?;
        let option = is_option(field_type);

        if option && attrs.default.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "Option<T> fields cannot have default attribute (they default to None automatically)",
            ));
        }

        let name = field_name.unraw().to_string();
        let key = format!(
            "{}{}",
            struct_attrs.prefix,
            attrs.key.unwrap_or_else(|| name.to_uppercase())
        );
        let required = attrs.required;
        let has_default = attrs.default.is_some();

        descriptors.push(quote! {
            ::envbind::FieldDescriptor::new(
                #name,
                #key,
                <#field_type as ::envbind::EnvValue>::declared_type(),
            )
            .required(#required)
            .has_default(#has_default)
        });

        let initializer = match attrs.default {
            Some(Some(default_value)) => quote! {
                values.take::<#field_type>(#name)?.unwrap_or_else(|| #default_value)
            },
            Some(None) => quote! {
                values.take::<#field_type>(#name)?.unwrap_or_else(::core::default::Default::default)
            },
            // resolution always yields a value (possibly null) for Option<T>
            None if option => quote! {
                values.take::<#field_type>(#name)?.unwrap_or_default()
            },
            None => quote! {
                values.require::<#field_type>(#name)?
            },
        };

        initializers.push(quote! {
            #field_name: #initializer
        });
    }

    Ok(quote! {
        impl #impl_generics ::envbind::EnvSchema for #struct_name #ty_generics #where_clause {
            fn schema() -> ::envbind::Schema {
                ::envbind::Schema::new(#type_name, ::std::vec![#(#descriptors),*])
            }

            fn construct(
                mut values: ::envbind::FieldValues,
            ) -> ::core::result::Result<Self, ::envbind::Error> {
                ::core::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }
        }

        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Load configuration from the env file described by `config`
            ///
            /// # Errors
            ///
            /// - The env file is missing or malformed
            /// - Required keys are not set, or blank values cannot be filled
            /// - Values cannot be converted into their field types
            pub fn load(config: &::envbind::LoadConfig) -> ::envbind::anyhow::Result<Self> {
                ::core::result::Result::Ok(::envbind::load::<Self>(config)?)
            }

            /// Load configuration from the process environment
            ///
            /// # Errors
            ///
            /// - Required environment variables are not set, or blank values cannot be filled
            /// - Values cannot be converted into their field types
            pub fn from_env() -> ::envbind::anyhow::Result<Self> {
                ::core::result::Result::Ok(::envbind::from_env::<Self>(
                    &::envbind::LoadConfig::default(),
                )?)
            }
        }
    })
}
