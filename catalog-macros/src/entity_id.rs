use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持无泛型的单字段 tuple struct，并为包装类型：
/// - 合并/追加派生：Default, Clone, Debug（可关闭）, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、value()、Display、FromStr、AsRef、From 等便捷实现
/// - 参数：`#[entity_id(debug = true|false)]`，默认 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let derive_debug = if attr.is_empty() {
        true
    } else {
        match parse_debug_flag(attr) {
            Ok(b) => b,
            Err(e) => return e.to_compile_error().into(),
        }
    };
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(st.generics.span(), "#[entity_id] does not support generics")
            .to_compile_error()
            .into();
    }

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        other => {
            return syn::Error::new(
                other.span(),
                "#[entity_id] requires a tuple struct with exactly one field, e.g., struct X(Uuid);",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];
    if derive_debug {
        required.insert(2, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;

    let out = quote! {
        #st

        impl #ident {
            pub fn new(value: #inner_ty) -> Self { Self(value) }

            pub fn value(&self) -> &#inner_ty { &self.0 }
        }

        impl ::std::str::FromStr for #ident {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::core::convert::AsRef<#inner_ty> for #ident {
            fn as_ref(&self) -> &#inner_ty { &self.0 }
        }

        impl ::core::convert::From<#ident> for #inner_ty {
            fn from(value: #ident) -> Self { value.0 }
        }

        impl ::core::convert::From<#inner_ty> for #ident {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }
    };

    TokenStream::from(out)
}

fn parse_debug_flag(attr: TokenStream) -> syn::Result<bool> {
    let meta: syn::MetaNameValue = syn::parse(attr)?;
    if !meta.path.is_ident("debug") {
        return Err(syn::Error::new(
            meta.path.span(),
            "unknown key in attribute; expected 'debug'",
        ));
    }
    match meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Bool(b),
            ..
        }) => Ok(b.value()),
        other => Err(syn::Error::new(
            other.span(),
            "expected boolean literal for 'debug'",
        )),
    }
}
