use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    bracketed, parse_macro_input, parse_quote, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl,
    ReturnType, Token, Type,
};

/// Arguments of `#[simple_factory(...)]`.
#[derive(Default)]
struct FactoryArgs {
    shortcuts: Vec<Ident>,
    dispatch: Vec<Ident>,
    output: Option<Type>,
}

enum FactoryArg {
    Shortcut(Ident),
    Dispatch(Vec<Ident>),
    Output(Type),
}

impl Parse for FactoryArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if !input.peek(Ident) {
            return Err(input.error("expected a method name"));
        }
        let name: Ident = input.parse()?;
        if !input.peek(Token![=]) {
            return Ok(FactoryArg::Shortcut(name));
        }
        input.parse::<Token![=]>()?;

        if name == "dispatch" {
            let content;
            bracketed!(content in input);
            let names = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
            Ok(FactoryArg::Dispatch(names.into_iter().collect()))
        } else if name == "output" {
            Ok(FactoryArg::Output(input.parse()?))
        } else {
            Err(syn::Error::new(
                name.span(),
                format!("unknown option `{name}`, expected `dispatch` or `output`"),
            ))
        }
    }
}

impl Parse for FactoryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = FactoryArgs::default();
        for arg in Punctuated::<FactoryArg, Token![,]>::parse_terminated(input)? {
            match arg {
                FactoryArg::Shortcut(name) => args.shortcuts.push(name),
                FactoryArg::Dispatch(names) => args.dispatch.extend(names),
                FactoryArg::Output(ty) => {
                    if args.output.is_some() {
                        return Err(syn::Error::new(ty.span(), "`output` given twice"));
                    }
                    args.output = Some(ty);
                }
            }
        }
        Ok(args)
    }
}

pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemImpl);
    let generated = syn::parse::<FactoryArgs>(args).and_then(|args| expand_impl(&args, &item));
    match generated {
        Ok(generated) => quote! { #item #generated }.into(),
        Err(err) => {
            let err = err.to_compile_error();
            quote! { #item #err }.into()
        }
    }
}

fn expand_impl(args: &FactoryArgs, item: &ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "#[simple_factory] must be placed on an inherent impl block",
        ));
    }

    let methods: Vec<&ImplItemFn> = item.items.iter().filter_map(dispatchable).collect();

    // The listed shortcuts found in this block fix the output type.
    let mut output = args.output.clone();
    for name in &args.shortcuts {
        let Some(method) = methods.iter().find(|method| method.sig.ident == *name) else {
            continue;
        };
        let ty = return_type(method);
        match &output {
            None => output = Some(ty),
            Some(expected) if *expected == ty => {}
            Some(expected) => {
                return Err(syn::Error::new(
                    method.sig.ident.span(),
                    format!(
                        "shortcuts must share one return type: `{}` returns `{}`, expected `{}`",
                        name,
                        ty.to_token_stream(),
                        expected.to_token_stream(),
                    ),
                ));
            }
        }
    }
    let output: Type = output.unwrap_or_else(|| parse_quote! { () });

    let mut dispatched: Vec<&Ident> = methods
        .iter()
        .filter(|method| return_type(method) == output)
        .map(|method| &method.sig.ident)
        .collect();
    for name in &args.dispatch {
        if !dispatched.contains(&name) {
            dispatched.push(name);
        }
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let method_names: Vec<String> = dispatched
        .iter()
        .map(|name| name.unraw().to_string())
        .collect();
    let shortcut_names = args.shortcuts.iter().map(|name| name.unraw().to_string());

    Ok(quote! {
        impl #impl_generics ::simple_factory::Respond for #self_ty #where_clause {
            type Output = #output;

            #[allow(unused_mut)]
            fn respond(
                mut self,
                method: &str,
            ) -> ::core::result::Result<Self::Output, ::simple_factory::MissingMethod> {
                match method {
                    #(#method_names => ::core::result::Result::Ok(self.#dispatched()),)*
                    _ => ::core::result::Result::Err(
                        ::simple_factory::MissingMethod::new::<Self>(method),
                    ),
                }
            }

            fn responds_to(method: &str) -> bool {
                let dispatched: &[&str] = &[#(#method_names),*];
                dispatched.contains(&method)
            }
        }

        impl #impl_generics ::simple_factory::SimpleFactory for #self_ty #where_clause {
            const SHORTCUTS: &'static [&'static str] = &[#(#shortcut_names),*];
        }
    })
}

/// A method callable as `instance.name()` on an owned instance.
fn dispatchable(impl_item: &ImplItem) -> Option<&ImplItemFn> {
    let ImplItem::Fn(method) = impl_item else {
        return None;
    };
    let sig = &method.sig;
    if sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || !sig.generics.params.is_empty()
        || sig.inputs.len() != 1
    {
        return None;
    }
    match sig.inputs.first() {
        Some(FnArg::Receiver(receiver)) if receiver.colon_token.is_none() => Some(method),
        _ => None,
    }
}

fn return_type(method: &ImplItemFn) -> Type {
    match &method.sig.output {
        ReturnType::Default => parse_quote! { () },
        ReturnType::Type(_, ty) => (**ty).clone(),
    }
}
