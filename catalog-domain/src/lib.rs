//! 目录领域层（catalog-domain）
//!
//! 核心是领域校验与错误累积机制：
//! - 实体（`entity`）与聚合根（`aggregate_root`）通过 `validate(handler)` 自校验；
//! - 校验处理器（`validation`）提供两种策略：快速失败（`ThrowsValidationHandler`）
//!   与全量累积（`Notification`），校验规则只需针对 `ValidationHandler` 编写一次；
//! - 结构化失败（`exception::DomainException`）作为快速失败的返回值与累积时的吸收对象；
//! - 示例聚合 `category::Category` 及其校验器、网关端口（`CategoryGateway`）与分页类型。
//!
//! 本 crate 不包含持久化与传输实现，仅定义领域层接口与最小必要的错误类型。
//!
//! 典型用法：
//! 1. 用例创建 `Notification::create()`；
//! 2. 调用 `category.validate(&mut notification)`；
//! 3. 根据 `has_error()` 决定是否交给网关持久化，或将 `errors()` 返回给调用方。
//!
pub mod aggregate_root;
pub mod category;
pub mod entity;
pub mod error;
pub mod exception;
pub mod pagination;
pub mod validation;

// 允许在本 crate 内部通过 ::catalog_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内也能解析。
extern crate self as catalog_domain;
