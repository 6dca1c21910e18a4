//! 分页查询（SearchQuery）与分页结果（Pagination）
//!
//! 网关 `find_all` 的输入与输出。页码从 1 开始。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// 分页查询参数
///
/// ```
/// use catalog_domain::pagination::{SearchQuery, SortDirection};
///
/// let query = SearchQuery::builder().page(2).terms("film").sort("name").build();
/// assert_eq!(query.page(), 2);
/// assert_eq!(query.per_page(), SearchQuery::DEFAULT_PER_PAGE);
/// assert_eq!(query.direction(), SortDirection::Desc);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// 页码（从 1 开始）
    #[builder(default = 1)]
    page: u64,
    /// 每页条数
    #[builder(default = SearchQuery::DEFAULT_PER_PAGE)]
    per_page: u64,
    /// 过滤关键字，空串表示不过滤
    #[builder(default, into)]
    terms: String,
    /// 排序字段，空串表示由网关决定默认排序
    #[builder(default, into)]
    sort: String,
    #[builder(default)]
    direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SearchQuery {
    pub const DEFAULT_PER_PAGE: u64 = 15;

    /// 页码，小于 1 时按 1 处理
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// 每页条数，为 0 时按默认值处理
    pub fn per_page(&self) -> u64 {
        if self.per_page == 0 {
            Self::DEFAULT_PER_PAGE
        } else {
            self.per_page
        }
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// 当前页之前需跳过的条数
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u64, per_page: u64, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// 转换每一项，分页信息保持不变
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
