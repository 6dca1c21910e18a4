use super::CategoryListOutput;
use crate::error::AppError;
use crate::use_case::UseCase;
use async_trait::async_trait;
use catalog_domain::category::CategoryGateway;
use catalog_domain::pagination::{Pagination, SearchQuery};
use tracing::debug;

/// 分页列出分类
pub struct ListCategoriesUseCase<G> {
    gateway: G,
}

impl<G> ListCategoriesUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase<SearchQuery, Pagination<CategoryListOutput>> for ListCategoriesUseCase<G>
where
    G: CategoryGateway,
{
    async fn execute(&self, query: SearchQuery) -> Result<Pagination<CategoryListOutput>, AppError> {
        let page = self.gateway.find_all(&query).await?;
        debug!(
            page = page.current_page,
            total = page.total,
            terms = query.terms(),
            "listed categories"
        );
        Ok(page.map(|category| CategoryListOutput::from(&category)))
    }
}
