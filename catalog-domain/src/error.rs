//! 领域层统一错误定义
//!
//! 聚焦标识解析、网关/仓储与校验失败等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use crate::exception::DomainException;
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 解析 ---
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 网关/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("repository error: {reason}")]
    Repository { reason: String },

    // --- 领域规则 ---
    #[error("validation failed: {0}")]
    Validation(#[from] DomainException),
}

impl DomainError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        DomainError::NotFound {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许直接使用 `?` 将标识解析错误转换为 DomainError
impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
