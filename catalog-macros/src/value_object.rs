use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 值对象以值判等、可复制传递、可序列化：
///   合并/追加派生 Default, Clone, (Debug 可控), Serialize, Deserialize, PartialEq, Eq
/// - 参数：`#[value_object(debug = true|false)]`，默认 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];
    if cfg.derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }

    match &mut input {
        Item::Struct(st) => apply_derives(&mut st.attrs, required),
        Item::Enum(en) => apply_derives(&mut en.attrs, required),
        other => {
            return syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    }

    TokenStream::from(quote! { #input })
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { derive_debug: true });
        }

        let key: syn::Ident = input.parse()?;
        if key != "debug" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after 'debug = <bool>'"));
        }

        Ok(Self {
            derive_debug: lit.value(),
        })
    }
}
