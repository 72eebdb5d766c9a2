#![deny(missing_docs)]
//! # algebra-core-derive: field-wise derives for the group hierarchy
//!
//! This crate provides **derive macros** for `algebra-core`, so that
//! coordinate aggregates (vectors, twists, increments) get their
//! additive group structure from their fields instead of hand-written
//! boilerplate.
//!
//! ## Supported derives
//!
//! - **`#[derive(Semigroup)]`**: `combine` combines each field
//! - **`#[derive(Monoid)]`**: `empty()` is built from each field's `empty()`
//! - **`#[derive(CommutativeMonoid)]`**: marker, every field must be commutative
//! - **`#[derive(Group)]`**: `inverse` inverts each field
//! - **`#[derive(AbelianGroup)]`**: marker, every field must be abelian
//!
//! ## Usage
//!
//! The macros are re-exported through `algebra-core` when its `derive`
//! feature is enabled:
//!
//! ```ignore
//! use algebra_core::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! #[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
//! struct Twist<T> {
//!     trans_vel: Vector<T>,
//!     rot_vel: T,
//! }
//! ```
//!
//! Generic structs get one `where` predicate per field type, so
//! `Twist<T>` above is a group exactly when `Vector<T>` and `T` are.
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;
use syn::parse_quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::Data;
use syn::DeriveInput;
use syn::Field;
use syn::Fields;
use syn::Ident;

/// What the generated impl body does with the fields.
enum Body {
    /// `fn combine(&self, other: &Self) -> Self`, field by field.
    Combine,
    /// `fn empty() -> Self`, field by field.
    Empty,
    /// `fn inverse(&self) -> Self`, field by field.
    Inverse,
    /// Marker trait, no items.
    Marker,
}

/// The named fields of `input`, or an error spanned on its name.
fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(&named.named),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "algebra derives only support structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "algebra derives are only supported on structs",
        )),
    }
}

/// Generate `impl ::algebra_core::<trait_name> for <input>`, bounding
/// every field type by the same trait.
fn expand(input: &DeriveInput, trait_name: &str, body: Body) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = named_fields(input)?;
    let trait_ident = Ident::new(trait_name, proc_macro2::Span::call_site());

    let field_idents: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for field in fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::algebra_core::#trait_ident));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let items = match body {
        Body::Combine => quote! {
            fn combine(&self, other: &Self) -> Self {
                #name {
                    #( #field_idents: ::algebra_core::Semigroup::combine(&self.#field_idents, &other.#field_idents), )*
                }
            }
        },
        Body::Empty => quote! {
            fn empty() -> Self {
                #name {
                    #( #field_idents: ::algebra_core::Monoid::empty(), )*
                }
            }
        },
        Body::Inverse => quote! {
            fn inverse(&self) -> Self {
                #name {
                    #( #field_idents: ::algebra_core::Group::inverse(&self.#field_idents), )*
                }
            }
        },
        Body::Marker => TokenStream2::new(),
    };

    Ok(quote! {
        impl #impl_generics ::algebra_core::#trait_ident for #name #ty_generics
        #where_clause
        {
            #items
        }
    })
}

fn derive(input: TokenStream, trait_name: &str, body: Body) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input, trait_name, body)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `algebra_core::Semigroup`.
///
/// `combine` is applied to each field; for vector-like aggregates of
/// floats this is componentwise addition.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    derive(input, "Semigroup", Body::Combine)
}

/// Derive macro for `algebra_core::Monoid`.
///
/// `empty()` is every field's `empty()`: the zero vector, the zero
/// twist.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    derive(input, "Monoid", Body::Empty)
}

/// Derive macro for `algebra_core::CommutativeMonoid`.
#[proc_macro_derive(CommutativeMonoid)]
pub fn derive_commutative_monoid(input: TokenStream) -> TokenStream {
    derive(input, "CommutativeMonoid", Body::Marker)
}

/// Derive macro for `algebra_core::Group`.
///
/// `inverse` inverts each field (negation for float coordinates).
#[proc_macro_derive(Group)]
pub fn derive_group(input: TokenStream) -> TokenStream {
    derive(input, "Group", Body::Inverse)
}

/// Derive macro for `algebra_core::AbelianGroup`.
#[proc_macro_derive(AbelianGroup)]
pub fn derive_abelian_group(input: TokenStream) -> TokenStream {
    derive(input, "AbelianGroup", Body::Marker)
}
