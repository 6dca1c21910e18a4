//! 聚合根（AggregateRoot）
//!
//! 聚合根是持久化与校验的基本单元，拥有自身的不变量。
//! 校验由外部（用例）触发，规则则由该聚合类型专属的校验器承载：
//! 聚合只负责把自身与调用方选择的处理器交给校验器，不关心处理器采用哪种策略。
//!
use crate::entity::Entity;
use crate::validation::{ValidationHandler, ValidationResult};

/// 聚合根接口
pub trait AggregateRoot: Entity {
    /// 将违反的规则写入 `handler`
    ///
    /// 在 `Notification` 下总是返回 `Ok`，错误留在处理器中；
    /// 在 `ThrowsValidationHandler` 下首个违反的规则即以 `Err` 返回。
    fn validate<H>(&self, handler: &mut H) -> ValidationResult<()>
    where
        H: ValidationHandler;
}
