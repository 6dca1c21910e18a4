use quote::ToTokens;
use std::collections::HashSet;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

// 归一化 derive 的 key，使 `Serialize` 与 `serde::Serialize` 视为同一项
fn derive_key(path: &Path) -> String {
    match path.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => path.to_token_stream().to_string(),
    }
}

/// 将 `required` 与结构体上已有的 derive 合并为一个 `#[derive(...)]`
/// - required 在前且优先保留；重复项按 `derive_key` 去重
/// - 非 derive 属性保持原有顺序，排在合并后的 derive 之后
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.drain(..) {
        if !attr.path().is_ident("derive") {
            retained.push(attr);
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            existing.extend(list);
        }
    }

    let mut seen = HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}
