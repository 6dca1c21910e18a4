use async_trait::async_trait;
use catalog_domain::category::{Category, CategoryGateway, CategoryId};
use catalog_domain::entity::Entity;
use catalog_domain::error::{DomainError, DomainResult};
use catalog_domain::pagination::{Pagination, SearchQuery, SortDirection};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::cmp::Ordering;
use tracing::debug;

/// 基于内存的 CategoryGateway 实现
/// - 以 `CategoryId` 为键保存分类快照
/// - `find_all`：按名称（不区分大小写）过滤，按 `name` 或 `createdAt` 排序（默认 `createdAt` 倒序）后分页
#[derive(Default)]
pub struct InMemoryCategoryGateway {
    items: DashMap<CategoryId, Category>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> DomainResult<Category> {
        match self.items.entry(category.id().clone()) {
            Entry::Occupied(_) => Err(DomainError::Repository {
                reason: format!("Category with ID {} already exists", category.id()),
            }),
            Entry::Vacant(slot) => {
                slot.insert(category.clone());
                Ok(category)
            }
        }
    }

    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()> {
        if self.items.remove(id).is_none() {
            debug!(category_id = %id, "delete of unknown category ignored");
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.items.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        match self.items.get_mut(category.id()) {
            Some(mut entry) => {
                *entry = category.clone();
                Ok(category)
            }
            None => Err(DomainError::not_found(format!(
                "Category with ID {} was not found",
                category.id()
            ))),
        }
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        let terms = query.terms().trim().to_lowercase();
        let mut matched: Vec<Category> = self
            .items
            .iter()
            .filter(|entry| terms.is_empty() || entry.name().to_lowercase().contains(&terms))
            .map(|entry| entry.value().clone())
            .collect();

        let (sort, direction) = match query.sort() {
            "name" => (SortField::Name, query.direction()),
            "createdAt" | "created_at" => (SortField::CreatedAt, query.direction()),
            _ => (SortField::CreatedAt, SortDirection::Desc),
        };
        matched.sort_by(|a, b| {
            let ord = sort.compare(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(query.per_page()).unwrap_or(usize::MAX))
            .collect();

        Ok(Pagination::new(query.page(), query.per_page(), total, items))
    }
}

#[derive(Clone, Copy)]
enum SortField {
    Name,
    CreatedAt,
}

impl SortField {
    fn compare(self, a: &Category, b: &Category) -> Ordering {
        match self {
            SortField::Name => a.name().cmp(b.name()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn category_at(name: &str, minutes_ago: i64) -> Category {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Category::with(CategoryId::unique(), name, None, true, at, at, None)
    }

    fn names(page: &Pagination<Category>) -> Vec<&str> {
        page.items.iter().map(Category::name).collect()
    }

    async fn seeded() -> InMemoryCategoryGateway {
        let gateway = InMemoryCategoryGateway::new();
        for (name, minutes_ago) in [("Movies", 4), ("Series", 3), ("Documentaries", 2), ("movie classics", 1)] {
            gateway.create(category_at(name, minutes_ago)).await.unwrap();
        }
        gateway
    }

    #[tokio::test]
    async fn create_then_find() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new_category("Movies", None, true);
        let id = category.id().clone();

        gateway.create(category).await.unwrap();

        let found = gateway.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name(), "Movies");
        assert_eq!(gateway.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new_category("Movies", None, true);
        gateway.create(category.clone()).await.unwrap();

        let err = gateway.create(category).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_of_one_id_store_it_once() {
        let gateway = Arc::new(InMemoryCategoryGateway::new());
        let category = Category::new_category("Movies", None, true);

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let gateway = gateway.clone();
                let mut candidate = category.clone();
                candidate.update(format!("Movies {i}"), None, true);
                tokio::spawn(async move { gateway.create(candidate).await })
            })
            .collect();

        let mut created = Vec::new();
        let mut rejected = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(stored) => created.push(stored),
                Err(DomainError::Repository { .. }) => rejected += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(created.len(), 1);
        assert_eq!(rejected, 15);
        let found = gateway.find_by_id(category.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), created[0].name());
    }

    #[tokio::test]
    async fn update_replaces_stored_state() {
        let gateway = InMemoryCategoryGateway::new();
        let mut category = Category::new_category("Movies", None, true);
        gateway.create(category.clone()).await.unwrap();

        category.update("Films", Some("renamed".into()), true);
        gateway.update(category.clone()).await.unwrap();

        let found = gateway.find_by_id(category.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Films");
        assert_eq!(found.description(), Some("renamed"));
    }

    #[tokio::test]
    async fn update_of_unknown_category_is_not_found() {
        let gateway = InMemoryCategoryGateway::new();
        let err = gateway
            .update(Category::new_category("Movies", None, true))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new_category("Movies", None, true);
        let id = category.id().clone();
        gateway.create(category).await.unwrap();

        gateway.delete_by_id(&id).await.unwrap();
        gateway.delete_by_id(&id).await.unwrap();

        assert!(gateway.find_by_id(&id).await.unwrap().is_none());
        assert!(gateway.is_empty());
    }

    #[tokio::test]
    async fn find_all_defaults_to_newest_first() {
        let gateway = seeded().await;
        let page = gateway.find_all(&SearchQuery::default()).await.unwrap();

        assert_eq!(page.total, 4);
        assert_eq!(
            names(&page),
            ["movie classics", "Documentaries", "Series", "Movies"]
        );
    }

    #[tokio::test]
    async fn find_all_filters_case_insensitively() {
        let gateway = seeded().await;
        let query = SearchQuery::builder()
            .terms("MOVIE")
            .sort("name")
            .direction(SortDirection::Asc)
            .build();

        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(names(&page), ["Movies", "movie classics"]);
    }

    #[tokio::test]
    async fn find_all_paginates_after_sorting() {
        let gateway = seeded().await;
        let query = SearchQuery::builder()
            .page(2)
            .per_page(3)
            .sort("createdAt")
            .direction(SortDirection::Asc)
            .build();

        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 3);
        assert_eq!(page.total, 4);
        assert_eq!(names(&page), ["movie classics"]);
    }

    #[tokio::test]
    async fn find_all_past_the_end_is_empty() {
        let gateway = seeded().await;
        let query = SearchQuery::builder().page(5).per_page(10).build();

        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 4);
        assert!(page.items.is_empty());
    }
}
