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
pub struct CreateCategoryCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateCategoryCommand {
    pub fn with(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl Dto for CreateCategoryOutput {}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}

/// 创建分类：全量校验通过后才持久化
pub struct CreateCategoryUseCase<G> {
    gateway: G,
}

impl<G> CreateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase<CreateCategoryCommand, CreateCategoryOutput> for CreateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    async fn execute(&self, cmd: CreateCategoryCommand) -> Result<CreateCategoryOutput, AppError> {
        let category = Category::new_category(cmd.name, cmd.description, cmd.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;

        if notification.has_error() {
            warn!(
                error_count = notification.errors().len(),
                "rejected invalid category"
            );
            return Err(notification.into());
        }

        let created = self.gateway.create(category).await?;
        info!(category_id = %created.id(), "category created");

        Ok(CreateCategoryOutput::from(&created))
    }
}
