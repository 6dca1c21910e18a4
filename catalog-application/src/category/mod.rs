//! 分类用例
//!
//! 每个用例持有一个 `CategoryGateway`，写操作在持久化前以 `Notification`
//! 完成一轮全量校验，将全部错误一次性返回给调用方。
//!
mod create;
mod delete;
mod get;
mod list;
mod output;
mod update;

pub use create::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryByIdUseCase;
pub use list::ListCategoriesUseCase;
pub use output::{CategoryListOutput, CategoryOutput};
pub use update::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};

use crate::error::AppError;
use catalog_domain::category::CategoryId;
use catalog_domain::error::DomainError;

/// 解析外部传入的分类标识
fn parse_id(raw: &str) -> Result<CategoryId, AppError> {
    raw.parse::<CategoryId>()
        .map_err(|e| AppError::Domain(DomainError::from(e)))
}

fn not_found(id: &CategoryId) -> AppError {
    AppError::NotFound(format!("Category with ID {id} was not found"))
}
