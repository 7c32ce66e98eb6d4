use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Field, Fields, Ident, Lit, LitStr, Meta,
};

pub fn derive_construct(input: TokenStream) -> TokenStream {
    let derived_input = parse_macro_input!(input as DeriveInput);
    match expand(&derived_input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(derived_input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &derived_input.ident;
    let vis = &derived_input.vis;
    let (impl_generics, ty_generics, where_clause) = derived_input.generics.split_for_impl();

    let fn_name = match find_attr(&derived_input.attrs, "ctor_name") {
        Some(attr) => string_attr(attr, "#[ctor_name = \"your_name\"]")?.parse::<Ident>()?,
        None => Ident::new("new", Span::call_site()),
    };

    let Data::Struct(ref struct_data) = derived_input.data else {
        return Err(syn::Error::new(
            name.span(),
            "Cannot derive Construct if type is not a struct",
        ));
    };

    let fields: Vec<&Field> = struct_data.fields.iter().collect();
    let mut var_names = Vec::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        let var_name = match find_attr(&field.attrs, "ctor_rename") {
            Some(attr) => string_attr(attr, "#[ctor_rename = \"name\"]")?.parse::<Ident>()?,
            None => match &field.ident {
                Some(ident) => ident.clone(),
                None => format_ident!("value_{}", idx + 1),
            },
        };
        var_names.push(var_name);
    }
    let types = struct_data.fields.iter().map(|field| &field.ty);

    let body = match struct_data.fields {
        Fields::Named(_) => {
            let field_names = struct_data.fields.iter().map(|field| &field.ident);
            quote! { Self { #(#field_names: #var_names),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#var_names),*) },
        Fields::Unit => quote! { Self },
    };
    let params = var_names.iter().zip(types.clone()).map(|(var, ty)| quote! { #var: #ty });

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #vis fn #fn_name(#(#params),*) -> Self {
                #body
            }
        }

        impl #impl_generics ::simple_factory::Construct for #name #ty_generics #where_clause {
            type Args = (#(#types,)*);
            type Error = ::core::convert::Infallible;

            fn construct(
                (#(#var_names,)*): Self::Args,
            ) -> ::core::result::Result<Self, Self::Error> {
                ::core::result::Result::Ok(Self::#fn_name(#(#var_names),*))
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn string_attr(attr: &Attribute, usage: &str) -> syn::Result<LitStr> {
    let Meta::NameValue(name_value) = &attr.meta else {
        return Err(syn::Error::new(
            attr.span(),
            format!("Incorrect use of attribute, use {usage} instead."),
        ));
    };
    let Expr::Lit(lit) = &name_value.value else {
        return Err(syn::Error::new(
            name_value.value.span(),
            "Arguments passed to this attribute must be string literals.",
        ));
    };
    let Lit::Str(lit_str) = &lit.lit else {
        return Err(syn::Error::new(lit.span(), "Expected string literal."));
    };
    Ok(lit_str.clone())
}
