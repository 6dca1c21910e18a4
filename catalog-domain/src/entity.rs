//! 实体（Entity）基础抽象
//!
//! 实体以标识区分：两个实体相等当且仅当标识相等，与其余属性无关。
//! 通常通过 `#[entity(id = ...)]` 宏实现本 trait 并生成按标识判等的实现。
//!
use std::{fmt::Display, hash::Hash, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可比较与可克隆
    type Id: FromStr + Clone + Display + Eq + Hash + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
