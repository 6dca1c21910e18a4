//! 目录领域层过程宏（catalog-macros）
//!
//! - `#[entity]`：为具名字段结构体补齐 `id` 字段，实现 `Entity` 并按标识判等；
//! - `#[entity_id]`：为单字段 tuple struct 生成标识类型的常用实现；
//! - `#[value_object]`：为值对象合并值语义所需的派生。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;
mod value_object;

/// 实体宏
/// - 追加字段：`id: IdType`（若缺失）并置于字段最前
/// - 自动实现 `::catalog_domain::entity::Entity`，并生成按 `id` 判等的 `PartialEq/Eq`
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `String`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 标识宏：`#[entity_id] struct CategoryId(Uuid);`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏：`#[value_object(debug = true|false)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
