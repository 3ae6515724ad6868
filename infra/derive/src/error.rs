use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Variant, Visibility};

const INTERNAL_VARIANT: &str = "Internal";

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    has_message: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

pub(crate) fn expand(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(name, "ans_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let derives = missing_derives(input);
    let ext_trait = context_trait(name, &input.vis, &ext, &variants);
    let conversions = source_conversions(name, &ext, &variants);
    let messages = message_conversions(name, &variants);

    quote! {
        #derives
        #[allow(non_shorthand_field_patterns)]
        #input

        #ext_trait
        #conversions
        #messages

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &::std::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn parse_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "ans_error variants need named fields (`source`, `message`, `context`)",
        ));
    };

    let mut parsed = ErrorVariant {
        ident: &variant.ident,
        source: None,
        has_context: false,
        has_message: false,
        cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
    };

    for field in &fields.named {
        if field.attrs.iter().any(|attr| attr.path().is_ident("from")) {
            return Err(syn::Error::new_spanned(
                field,
                "`#[from]` conflicts with the generated conversions; use a `source` field",
            ));
        }
        let Some(ident) = &field.ident else { continue };
        if ident == "context" {
            if !is_context_type(field) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "`context` must be `Option<Cow<'static, str>>`",
                ));
            }
            parsed.has_context = true;
        } else if ident == "message" {
            parsed.has_message = true;
        } else if ident == "source" || field.attrs.iter().any(|attr| attr.path().is_ident("source")) {
            parsed.source = Some(field);
        }
    }

    if parsed.source.is_some() && !parsed.has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "variants with a source need `context: Option<Cow<'static, str>>`",
        ));
    }

    Ok(parsed)
}

fn context_trait(
    name: &Ident,
    vis: &Visibility,
    ext: &Ident,
    variants: &[ErrorVariant<'_>],
) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => Some(slot), }
    });

    quote! {
        /// Attaches context while propagating.
        #vis trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    let slot: ::std::option::Option<
                        &mut ::std::option::Option<::std::borrow::Cow<'static, str>>,
                    > = match &mut err {
                        #(#arms)*
                        #[allow(unreachable_patterns)]
                        _ => None,
                    };
                    if let Some(slot) = slot {
                        let outer: ::std::borrow::Cow<'static, str> = context.into();
                        *slot = Some(match slot.take() {
                            Some(inner) => ::std::borrow::Cow::Owned(format!("{outer}: {inner}")),
                            None => outer,
                        });
                    }
                    err
                })
            }
        }
    }
}

fn source_conversions(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let mut claimed = FxHashSet::default();

    let impls = variants.iter().filter(|v| v.ident != INTERNAL_VARIANT).filter_map(|v| {
        let field = v.source?;
        let field_ident = field.ident.as_ref()?;
        let ty = &field.ty;
        if !claimed.insert(ty.to_token_stream().to_string()) {
            return None;
        }
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;

        Some(quote! {
            #(#cfg_attrs)*
            #[automatically_derived]
            impl ::std::convert::From<#ty> for #name {
                #[inline]
                fn from(source: #ty) -> Self {
                    Self::#ident { #field_ident: source, context: None }
                }
            }

            #(#cfg_attrs)*
            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|source| #name::#ident {
                        #field_ident: source,
                        context: Some(context.into()),
                    })
                }
            }
        })
    });
    let impls: Vec<TokenStream> = impls.collect();

    quote! { #(#impls)* }
}

fn message_conversions(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let Some(internal) =
        variants.iter().find(|v| v.ident == INTERNAL_VARIANT && v.has_message && v.has_context)
    else {
        return TokenStream::new();
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl ::std::convert::From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl ::std::convert::From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// `Debug` and `thiserror::Error`, minus whatever the enum already derives.
fn missing_derives(input: &DeriveInput) -> TokenStream {
    let mut derived = FxHashSet::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                derived.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut wanted = Vec::new();
    if !derived.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    if wanted.is_empty() { TokenStream::new() } else { quote! { #[derive(#(#wanted),*)] } }
}

fn is_context_type(field: &Field) -> bool {
    let ty: String = field.ty.to_token_stream().to_string().split_whitespace().collect();
    let Some(inner) = ["Option<", "std::option::Option<", "::std::option::Option<"]
        .iter()
        .find_map(|prefix| ty.strip_prefix(prefix))
    else {
        return false;
    };
    ["Cow<'static,str>>", "std::borrow::Cow<'static,str>>", "::std::borrow::Cow<'static,str>>"]
        .contains(&inner)
}
