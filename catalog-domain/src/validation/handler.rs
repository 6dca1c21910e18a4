use super::{Error, Validation, ValidationResult};

/// 校验处理器：收集一个或多个 `Validation` 产生的 `Error`
///
/// 错误列表只追加、不收缩，顺序即校验执行顺序。
/// 同一份校验规则可运行在任一策略之下，规则本身不感知调用方选择了哪种策略。
/// 处理器每轮校验新建一个，不在多轮或多线程间复用。
pub trait ValidationHandler {
    /// 记录一条错误，返回处理器本身以便链式调用
    fn append(&mut self, error: Error) -> ValidationResult<&mut Self>;

    /// 合并另一个处理器已收集的错误（追加在当前错误之后）
    fn merge<H>(&mut self, other: &H) -> ValidationResult<&mut Self>
    where
        H: ValidationHandler + ?Sized;

    /// 执行一次校验，并按策略处理其失败
    fn validate<V>(&mut self, validation: V) -> ValidationResult<&mut Self>
    where
        V: Validation;

    /// 已收集的错误（有序）
    fn errors(&self) -> &[Error];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }
}
