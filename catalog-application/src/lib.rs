pub mod category;
pub mod dto;
pub mod error;
pub mod inmemory_category_gateway;
pub mod use_case;

pub use error::AppError;
pub use inmemory_category_gateway::InMemoryCategoryGateway;
pub use use_case::UseCase;
