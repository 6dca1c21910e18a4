//! 结构化领域失败（DomainException）
//!
//! 表达“本次操作不合法”的控制流载体：由快速失败路径产生，被 `Notification` 吸收。
//! 只携带有序的错误列表，不记录日志，也不携带 source 链。
//!
use crate::validation::Error;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
#[error("{}", join_messages(.errors))]
pub struct DomainException {
    errors: Vec<Error>,
}

impl DomainException {
    /// 唯一构造入口；调用方总是提供至少一条错误
    pub fn with(errors: Vec<Error>) -> Self {
        debug_assert!(
            !errors.is_empty(),
            "DomainException must carry at least one error"
        );
        Self { errors }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(Error::message)
        .collect::<Vec<_>>()
        .join("; ")
}
