use super::{CategoryId, CategoryValidator};
use crate::aggregate_root::AggregateRoot;
use crate::validation::{ValidationHandler, ValidationResult, Validator};
use catalog_macros::entity;
use chrono::{DateTime, Utc};

/// 分类聚合根
///
/// 不变量：
/// - `id` 创建后不可变；
/// - `created_at` 创建后不可变，`updated_at` 在每次变更时推进；
/// - 以停用状态创建时，`deleted_at` 与 `created_at` 相同；此后停用设置、激活清除 `deleted_at`。
#[entity(id = CategoryId)]
pub struct Category {
    name: String,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// 创建新分类（未经校验，由调用方选择处理器后调用 `validate`）
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// 由已持久化的状态重建分类
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(&mut self) -> &mut Self {
        self.activate_at(Utc::now())
    }

    pub fn deactivate(&mut self) -> &mut Self {
        self.deactivate_at(Utc::now())
    }

    /// 整体更新名称、描述与启用状态（同一次变更共用一个时间戳）
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
    ) -> &mut Self {
        let now = Utc::now();
        if active {
            self.activate_at(now);
        } else {
            self.deactivate_at(now);
        }
        self.name = name.into();
        self.description = description;
        self
    }

    fn activate_at(&mut self, now: DateTime<Utc>) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = now;
        self
    }

    // 已停用的分类保留最初的 deleted_at
    fn deactivate_at(&mut self, now: DateTime<Utc>) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Category {
    fn validate<H>(&self, handler: &mut H) -> ValidationResult<()>
    where
        H: ValidationHandler,
    {
        CategoryValidator::new(self, handler).validate()
    }
}
