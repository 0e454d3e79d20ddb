use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

use super::derived_trait_names;

/// Arguments accepted by `#[api_model(...)]`.
#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde settings already present on the struct.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_attrs(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

fn api_model_attrs(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let existing = existing_serde(&input.attrs)?;
    let derives = derived_trait_names(&input.attrs);

    let mut derive_tokens = Vec::new();
    if !derives.contains("Debug") {
        derive_tokens.push(quote!(Debug));
    }
    if !derives.contains("Serialize") {
        derive_tokens.push(quote!(::serde::Serialize));
    }
    if !derives.contains("Deserialize") {
        derive_tokens.push(quote!(::serde::Deserialize));
    }
    if !derives.contains("ToSchema") {
        derive_tokens.push(quote!(::utoipa::ToSchema));
    }
    let derive_attr =
        if derive_tokens.is_empty() { quote!() } else { quote!(#[derive(#(#derive_tokens),*)]) };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            ));
        },
        Some(_) => quote!(),
        None => quote!(#[serde(rename_all = #rename)]),
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (existing.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        },
        (false, true) => quote!(#[serde(deny_unknown_fields)]),
        _ => quote!(),
    };

    Ok(quote! {
        #derive_attr
        #rename_attr
        #deny_attr
    })
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[::utoipa::path(#args)]
        #vis #sig #block
    }
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if name_value.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&name_value, "rename_all must be a string literal")?
            else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "rename_all must be a string literal",
                ));
            };
            set_once(&mut parsed.rename_all, &name_value, value)?;
        } else if name_value.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) =
                literal(&name_value, "deny_unknown_fields must be a boolean literal")?
            else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "deny_unknown_fields must be a boolean literal",
                ));
            };
            set_once(&mut parsed.deny_unknown_fields, &name_value, value.value)?;
        } else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(name_value: &MetaNameValue, message: &str) -> syn::Result<Lit> {
    match &name_value.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip values of unrelated serde keys.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}
