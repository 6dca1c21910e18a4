use super::{Category, CategoryId};
use crate::error::DomainResult;
use crate::pagination::{Pagination, SearchQuery};
use async_trait::async_trait;
use std::sync::Arc;

/// 分类网关（持久化端口）
///
/// 只接收与返回已校验的分类，具体存储由基础设施层实现并注入。
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: Category) -> DomainResult<Category>;

    /// 删除分类；标识不存在时视为成功
    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()>;

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;

    /// 覆盖已存在的分类；标识不存在时返回 `DomainError::NotFound`
    async fn update(&self, category: Category) -> DomainResult<Category>;

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>>;
}

#[async_trait]
impl<T> CategoryGateway for Arc<T>
where
    T: CategoryGateway + ?Sized,
{
    async fn create(&self, category: Category) -> DomainResult<Category> {
        (**self).create(category).await
    }

    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()> {
        (**self).delete_by_id(id).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        (**self).find_by_id(id).await
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        (**self).update(category).await
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        (**self).find_all(query).await
    }
}
