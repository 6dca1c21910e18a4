use super::{Error, Validation, ValidationHandler, ValidationResult, into_exception};

/// 全量累积的校验处理器
///
/// 校验失败不会越过 `validate` 向外传播：结构化失败的全部错误、意外失败的描述
/// 都被追加到错误列表中，本轮校验总能完整结束，所有方法都返回 `Ok`。
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn create_with(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// 交出错误列表（供报告层直接序列化）
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> ValidationResult<&mut Self> {
        self.errors.push(error);
        Ok(self)
    }

    fn merge<H>(&mut self, other: &H) -> ValidationResult<&mut Self>
    where
        H: ValidationHandler + ?Sized,
    {
        self.errors.extend_from_slice(other.errors());
        Ok(self)
    }

    fn validate<V>(&mut self, validation: V) -> ValidationResult<&mut Self>
    where
        V: Validation,
    {
        if let Err(err) = validation.validate() {
            self.errors.extend(into_exception(err).into_errors());
        }
        Ok(self)
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}
