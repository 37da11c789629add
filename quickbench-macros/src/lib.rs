//! QuickBench Macros
//!
//! Procedural macros for declaring candidates.
//!
//! ## Macros
//!
//! - `#[quickbench::candidate]` - Derive a candidate from a plain function,
//!   reading its parameter names as the arguments to bind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, Pat, ReturnType, Type, parse_macro_input};

// ============================================================================
// Attribute Parsing Helpers
// ============================================================================

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Turn a function into a candidate.
///
/// The function is kept as-is. Next to it, a `<name>_candidate()`
/// constructor is generated that returns an `impl Candidate`. Each parameter
/// name becomes a declared argument, looked up in the bundle by that name.
///
/// Parameter types map to bundle values as follows:
/// - `&T` borrows a `T`
/// - `&str` borrows a `String`, `&[T]` borrows a `Vec<T>`
/// - any other `T` clones a `T`
///
/// # Example
///
/// ```ignore
/// #[quickbench::candidate]
/// fn naive(a: &Matrix, b: &Matrix) -> Matrix { a.mul(b) }
///
/// // Display name override
/// #[quickbench::candidate(name = "einsum")]
/// fn fused(a: &Matrix, b: &Matrix) -> Matrix { ... }
///
/// // Errors returned by the function become invocation errors
/// #[quickbench::candidate(fallible)]
/// fn parse(input: &str) -> Result<u64, std::num::ParseIntError> { input.parse() }
///
/// let mut funcs = quickbench::candidates![naive_candidate(), fused_candidate()];
/// ```
#[proc_macro_attribute]
pub fn candidate(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    candidate_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn candidate_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    // Validate signature
    validate_signature(&func)?;

    // Parse configuration
    let config = parse_candidate_config(args)?;

    // Generate identifiers
    let fn_name = &func.sig.ident;
    let fn_name_str = fn_name.to_string();
    let ctor_name = format_ident!("{}_candidate", fn_name);
    let vis = &func.vis;
    let display_name = config.name.unwrap_or_else(|| fn_name_str.clone());

    let mut param_names = Vec::new();
    let mut arg_exprs = Vec::new();
    for input in &func.sig.inputs {
        let (name, expr) = bind_param(input)?;
        param_names.push(name);
        arg_exprs.push(expr);
    }

    let return_ty = match &func.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let (output_ty, call) = if config.fallible {
        let ok_ty = result_ok_type(&func.sig.output)?;
        (
            quote! { #ok_ty },
            quote! {
                #fn_name(#(#arg_exprs),*)
                    .map_err(::core::convert::Into::<::quickbench::BoxError>::into)
            },
        )
    } else {
        (
            return_ty,
            quote! {
                ::core::result::Result::Ok(#fn_name(#(#arg_exprs),*))
            },
        )
    };

    let doc = format!("Candidate wrapping [`{}`].", fn_name_str);

    Ok(quote! {
        #func

        #[doc = #doc]
        #[allow(dead_code)]
        #vis fn #ctor_name() -> impl ::quickbench::Candidate<Output = #output_ty> {
            ::quickbench::FnCandidate::new(
                &[#(#param_names),*],
                |__quickbench_args: &::quickbench::BoundArgs<'_>| { #call },
            )
            .named(#display_name)
        }
    })
}

/// Parameter name and the expression fetching it from `__quickbench_args`
fn bind_param(input: &FnArg) -> Result<(String, TokenStream2), syn::Error> {
    let typed = match input {
        FnArg::Typed(typed) => typed,
        FnArg::Receiver(receiver) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "candidate functions cannot take `self`",
            ));
        }
    };

    let name = match typed.pat.as_ref() {
        Pat::Ident(pat) if pat.by_ref.is_none() && pat.subpat.is_none() => {
            pat.ident.to_string().trim_start_matches("r#").to_string()
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "candidate parameters must be plain identifiers; the name is the argument key",
            ));
        }
    };

    let expr = match typed.ty.as_ref() {
        Type::Reference(reference) => {
            if reference.mutability.is_some() {
                return Err(syn::Error::new_spanned(
                    reference,
                    "candidate parameters cannot be `&mut`; the argument bundle is read-only",
                ));
            }
            match reference.elem.as_ref() {
                Type::Slice(slice) => {
                    let elem = &slice.elem;
                    quote! {
                        __quickbench_args.get::<::std::vec::Vec<#elem>>(#name)?.as_slice()
                    }
                }
                Type::Path(path) if path.qself.is_none() && path.path.is_ident("str") => {
                    quote! {
                        __quickbench_args.get::<::std::string::String>(#name)?.as_str()
                    }
                }
                elem => quote! {
                    __quickbench_args.get::<#elem>(#name)?
                },
            }
        }
        Type::ImplTrait(impl_trait) => {
            return Err(syn::Error::new_spanned(
                impl_trait,
                "candidate parameters cannot use `impl Trait`",
            ));
        }
        ty => quote! {
            ::core::clone::Clone::clone(__quickbench_args.get::<#ty>(#name)?)
        },
    };

    Ok((name, expr))
}

/// Extract `T` from a `Result<T, E>` return type
fn result_ok_type(output: &ReturnType) -> Result<Type, syn::Error> {
    let error = || {
        syn::Error::new_spanned(
            output,
            "`fallible` candidates must return `Result<T, E>`",
        )
    };

    let ReturnType::Type(_, ty) = output else {
        return Err(error());
    };
    let Type::Path(path) = ty.as_ref() else {
        return Err(error());
    };
    let segment = path.path.segments.last().ok_or_else(error)?;
    if segment.ident != "Result" {
        return Err(error());
    }
    let syn::PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return Err(error());
    };
    match generics.args.first() {
        Some(syn::GenericArgument::Type(ok)) => Ok(ok.clone()),
        _ => Err(error()),
    }
}

fn validate_signature(func: &ItemFn) -> Result<(), syn::Error> {
    let sig = &func.sig;

    if sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            sig.asyncness,
            "candidate functions must be synchronous",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "candidate functions cannot be generic; wrap a concrete instantiation instead",
        ));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new_spanned(
            variadic,
            "candidate functions cannot be variadic",
        ));
    }

    Ok(())
}

#[derive(Default)]
struct CandidateConfig {
    name: Option<String>,
    fallible: bool,
}

fn parse_candidate_config(args: TokenStream2) -> Result<CandidateConfig, syn::Error> {
    let mut config = CandidateConfig::default();

    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "name" => config.name = Some(attr::string(&meta)?),
            "fallible" => config.fallible = true,
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;
    Ok(config)
}
