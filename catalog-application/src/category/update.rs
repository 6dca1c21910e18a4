use super::{not_found, parse_id};
use crate::dto::Dto;
use crate::error::AppError;
use crate::use_case::UseCase;
use async_trait::async_trait;
use catalog_domain::aggregate_root::AggregateRoot;
use catalog_domain::category::{Category, CategoryGateway};
use catalog_domain::entity::Entity;
use catalog_domain::validation::{Notification, ValidationHandler};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl Dto for UpdateCategoryOutput {}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}

/// 更新分类：加载、变更、全量校验，通过后覆盖保存
pub struct UpdateCategoryUseCase<G> {
    gateway: G,
}

impl<G> UpdateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase<UpdateCategoryCommand, UpdateCategoryOutput> for UpdateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    async fn execute(&self, cmd: UpdateCategoryCommand) -> Result<UpdateCategoryOutput, AppError> {
        let id = parse_id(&cmd.id)?;
        let Some(mut category) = self.gateway.find_by_id(&id).await? else {
            return Err(not_found(&id));
        };

        category.update(cmd.name, cmd.description, cmd.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;

        if notification.has_error() {
            warn!(
                category_id = %id,
                error_count = notification.errors().len(),
                "rejected invalid category update"
            );
            return Err(notification.into());
        }

        let updated = self.gateway.update(category).await?;
        info!(category_id = %updated.id(), "category updated");

        Ok(UpdateCategoryOutput::from(&updated))
    }
}
