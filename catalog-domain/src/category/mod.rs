//! 分类（Category）聚合
//!
//! - `CategoryId`：基于 UUID 的分类标识；
//! - `Category`：分类聚合根，创建、激活/停用与更新；
//! - `CategoryValidator`：分类的校验规则；
//! - `CategoryGateway`：分类的持久化端口（由基础设施层实现）。
//!
mod aggregate;
mod gateway;
mod id;
mod validator;

pub use aggregate::Category;
pub use gateway::CategoryGateway;
pub use id::CategoryId;
pub use validator::{CategoryValidator, rules};
