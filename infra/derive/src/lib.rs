#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Folio crates: error enums, feature slice
//! handles, and the `OpenAPI`-aware API models and handlers.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its
//! own macros; consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro for API data transfer objects.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize`, `Deserialize` and `utoipa::ToSchema` if missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct SubmitResponse {
///     pub success: bool,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts the standard `utoipa::path` arguments (`post`, `path = "..."`,
/// `responses(...)`, `tag = "..."`) and forwards them unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context carry a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping upstream errors carry a `source` field (or one marked
///    `#[source]`/`#[from]`) and must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::folio_error;
/// use std::borrow::Cow;
///
/// #[folio_error]
/// pub enum MailError {
///     #[error("Invalid address{}: {source}", format_context(.context))]
///     Address { source: lettre::address::AddressError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal mail error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let sender: Mailbox = raw.parse().context("sender address")?;
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Turns `struct Contact { .. }` into `ContactInner` holding the fields and a
/// cheaply clonable `Contact` wrapper (`Arc` + `Deref`) that implements
/// `FeatureSlice` for registration in the API state.
///
/// # Example
/// ```rust,ignore
/// #[folio_derive::folio_slice]
/// pub struct Contact {
///     pub mailer: Arc<dyn Mailer>,
/// }
///
/// let slice = Contact::new(ContactInner { mailer });
/// ```
#[proc_macro_attribute]
pub fn folio_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
