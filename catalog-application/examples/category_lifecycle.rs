use catalog_application::UseCase;
use catalog_application::category::{
    CreateCategoryCommand, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase,
    ListCategoriesUseCase, UpdateCategoryCommand, UpdateCategoryUseCase,
};
use catalog_application::error::AppError;
use catalog_application::InMemoryCategoryGateway;
use catalog_domain::pagination::{SearchQuery, SortDirection};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug 可查看网关日志
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let gateway = Arc::new(InMemoryCategoryGateway::new());
    let create = CreateCategoryUseCase::new(gateway.clone());
    let update = UpdateCategoryUseCase::new(gateway.clone());
    let get = GetCategoryByIdUseCase::new(gateway.clone());
    let list = ListCategoriesUseCase::new(gateway.clone());
    let delete = DeleteCategoryUseCase::new(gateway.clone());

    let movies = create
        .execute(CreateCategoryCommand::with(
            "Movies",
            Some("Most watched category".into()),
            true,
        ))
        .await?;
    create
        .execute(CreateCategoryCommand::with("Series", None, true))
        .await?;
    println!("created: {}", movies.id);

    // 一次返回全部校验错误
    match create
        .execute(CreateCategoryCommand::with("  ", Some("x".repeat(4001)), true))
        .await
    {
        Err(AppError::Validation(errors)) => {
            for error in &errors {
                println!("rejected: {error}");
            }
        }
        other => println!("unexpected: {other:?}"),
    }

    update
        .execute(UpdateCategoryCommand::with(
            movies.id.clone(),
            "Films",
            None,
            false,
        ))
        .await?;
    let found = get.execute(movies.id.clone()).await?;
    println!(
        "updated: name={} active={} deleted_at={:?}",
        found.name, found.is_active, found.deleted_at
    );

    let page = list
        .execute(
            SearchQuery::builder()
                .sort("name")
                .direction(SortDirection::Asc)
                .build(),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    delete.execute(movies.id.clone()).await?;
    if let Err(err) = get.execute(movies.id).await {
        println!("after delete: {err}");
    }

    Ok(())
}
