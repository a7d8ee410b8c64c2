//! `#[hooks]` - Attribute macro turning annotated methods into Hook implementations

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Error, Ident, ImplItem, ItemImpl, LitStr, Path, parse_macro_input};

/// A method annotated with `#[hook(Point)]`.
struct HookMethod {
    point: Path,
    method: Ident,
}

/// Implementation of the `#[hooks]` macro.
pub fn hooks_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new_spanned(TokenStream2::from(attr), "`#[hooks]` takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut input = parse_macro_input!(item as ItemImpl);
    match expand(&mut input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(Error::new_spanned(
            path,
            "`#[hooks]` must be placed on an inherent impl block",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "`#[hooks]` does not support generic impl blocks",
        ));
    }

    let methods = take_hook_methods(input)?;
    if methods.is_empty() {
        return Err(Error::new_spanned(
            &input.self_ty,
            "`#[hooks]` impl block has no `#[hook(...)]` methods",
        ));
    }

    let input: &ItemImpl = input;
    let self_ty = &input.self_ty;
    let type_name = quote!(#self_ty).to_string().replace(' ', "");

    let hook_impls = methods.iter().map(|HookMethod { point, method }| {
        quote! {
            impl ::hookset::Hook<#point> for #self_ty {
                fn invoke(
                    &self,
                    ctx: &mut <#point as ::hookset::HookPoint>::Context,
                ) -> <#point as ::hookset::HookPoint>::Output {
                    <#self_ty>::#method(self, ctx)
                }
            }
        }
    });

    let registrations = methods.iter().map(|HookMethod { point, method }| {
        let id = LitStr::new(&format!("{}::{}", type_name, method), method.span());
        quote! {
            hooks.implement_as::<#point, ::std::sync::Arc<Self>>(
                ::hookset::HandlerId::new(#id),
                ::std::sync::Arc::clone(&self),
            )?;
        }
    });

    Ok(quote! {
        #input

        #(#hook_impls)*

        impl ::hookset::RegisterHooks for #self_ty {
            fn register_hooks(
                self: ::std::sync::Arc<Self>,
                hooks: &mut ::hookset::ModuleHooks<'_>,
            ) -> ::core::result::Result<(), ::hookset::RegistryError> {
                #(#registrations)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Strip `#[hook(...)]` attributes from the block's methods and collect them.
fn take_hook_methods(input: &mut ItemImpl) -> syn::Result<Vec<HookMethod>> {
    let mut methods: Vec<HookMethod> = Vec::new();

    for item in &mut input.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };

        let mut point = None;
        let mut kept = Vec::with_capacity(method.attrs.len());
        for attr in method.attrs.drain(..) {
            if !attr.path().is_ident("hook") {
                kept.push(attr);
                continue;
            }
            if point.is_some() {
                return Err(Error::new_spanned(
                    &attr,
                    "a method can implement only one hook",
                ));
            }
            point = Some(attr.parse_args::<Path>()?);
        }
        method.attrs = kept;

        let Some(point) = point else {
            continue;
        };

        let sig = &method.sig;
        if sig.receiver().is_none() || sig.inputs.len() != 2 {
            return Err(Error::new_spanned(
                sig,
                "hook methods must take `&self` and the hook context: fn(&self, ctx: &mut Context)",
            ));
        }

        let key = quote!(#point).to_string();
        if methods.iter().any(|m| {
            let existing = &m.point;
            quote!(#existing).to_string() == key
        }) {
            return Err(Error::new_spanned(
                &point,
                format!("`{}` is already implemented by another method", key),
            ));
        }

        methods.push(HookMethod {
            point,
            method: sig.ident.clone(),
        });
    }

    Ok(methods)
}
