use super::{CategoryOutput, not_found, parse_id};
use crate::error::AppError;
use crate::use_case::UseCase;
use async_trait::async_trait;
use catalog_domain::category::CategoryGateway;
use tracing::debug;

/// 按标识查询分类
pub struct GetCategoryByIdUseCase<G> {
    gateway: G,
}

impl<G> GetCategoryByIdUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase<String, CategoryOutput> for GetCategoryByIdUseCase<G>
where
    G: CategoryGateway,
{
    async fn execute(&self, id: String) -> Result<CategoryOutput, AppError> {
        let id = parse_id(&id)?;
        debug!(category_id = %id, "loading category");

        match self.gateway.find_by_id(&id).await? {
            Some(category) => Ok(CategoryOutput::from(&category)),
            None => Err(not_found(&id)),
        }
    }
}
