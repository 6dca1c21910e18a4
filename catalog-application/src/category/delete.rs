use super::parse_id;
use crate::error::AppError;
use crate::use_case::UseCase;
use async_trait::async_trait;
use catalog_domain::category::CategoryGateway;
use tracing::info;

/// 删除分类（幂等：不存在的标识同样视为成功）
pub struct DeleteCategoryUseCase<G> {
    gateway: G,
}

impl<G> DeleteCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase<String, ()> for DeleteCategoryUseCase<G>
where
    G: CategoryGateway,
{
    async fn execute(&self, id: String) -> Result<(), AppError> {
        let id = parse_id(&id)?;
        self.gateway.delete_by_id(&id).await?;
        info!(category_id = %id, "category deleted");
        Ok(())
    }
}
