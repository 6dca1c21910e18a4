//! 校验（validation）
//!
//! - `Error`：单条校验失败信息；
//! - `Validation`：一段可执行的校验逻辑，通过或以 `anyhow::Error` 失败；
//! - `ValidationHandler`：收集校验错误的能力，提供两种策略：
//!   - `ThrowsValidationHandler`：快速失败，首个错误即以 `DomainException` 终止本轮校验；
//!   - `Notification`：全量累积，吸收所有失败并继续；
//! - `Validator`：针对某个实体类型的规则集合，在 `(实体, 处理器)` 上执行一次。
//!
//! 快速失败以 `ValidationResult` 的 `Err` 表达，配合 `?` 提前返回，不依赖展开（unwind）。
//!
mod error;
mod handler;
mod notification;
mod throws;

pub use error::Error;
pub use handler::ValidationHandler;
pub use notification::Notification;
pub use throws::ThrowsValidationHandler;

use crate::exception::DomainException;

/// 校验结果：`Ok` 表示继续，`Err` 表示本轮校验已被终止
pub type ValidationResult<T = ()> = Result<T, DomainException>;

/// 可执行的校验单元
///
/// 返回 `Err` 时，若其可向下转型为 `DomainException` 则视为结构化失败，
/// 否则视为意外失败，由处理器按各自策略转换为一条 `Error`。
pub trait Validation {
    fn validate(self) -> anyhow::Result<()>;
}

/// 由闭包构造的校验单元，参见 [`from_fn`]
pub struct FromFn<F>(F);

impl<F> Validation for FromFn<F>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    fn validate(self) -> anyhow::Result<()> {
        (self.0)()
    }
}

/// 将闭包包装为 [`Validation`]
///
/// ```
/// use catalog_domain::exception::DomainException;
/// use catalog_domain::validation::{self, Error, Notification, ValidationHandler};
///
/// let mut notification = Notification::create();
/// notification
///     .validate(validation::from_fn(|| {
///         Err(DomainException::with(vec![Error::new("broken")]).into())
///     }))
///     .unwrap();
/// assert_eq!(notification.errors(), &[Error::new("broken")]);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    FromFn(f)
}

/// 某一实体类型的校验器：持有对实体的只读借用与对处理器的可写借用
pub trait Validator {
    /// 逐条检查规则，并将违反的规则写入处理器
    fn validate(self) -> ValidationResult<()>;
}

/// 将一次校验失败转换为 `DomainException`
///
/// 沿错误链查找结构化失败（包括被 `DomainError::Validation` 或 `context` 包裹的情形），
/// 找到则原样取出其全部错误；否则将整个失败的描述包装为单条错误。
pub(crate) fn into_exception(err: anyhow::Error) -> DomainException {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<DomainException>())
    {
        Some(ex) => ex.clone(),
        None => DomainException::with(vec![Error::new(err.to_string())]),
    }
}
