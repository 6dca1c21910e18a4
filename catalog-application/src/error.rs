use catalog_domain::error::DomainError;
use catalog_domain::exception::DomainException;
use catalog_domain::validation::{Error, Notification};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 校验未通过，携带全部错误（顺序即校验顺序）
    #[error("validation: {}", join_messages(.0))]
    Validation(Vec<Error>),

    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// 校验错误列表；非校验错误返回空切片
    pub fn validation_errors(&self) -> &[Error] {
        match self {
            AppError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Notification> for AppError {
    fn from(notification: Notification) -> Self {
        AppError::Validation(notification.into_errors())
    }
}

impl From<DomainException> for AppError {
    fn from(exception: DomainException) -> Self {
        AppError::Validation(exception.into_errors())
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(Error::message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::validation::ValidationHandler;

    #[test]
    fn notification_becomes_validation_error() {
        let mut notification = Notification::create();
        notification
            .append(Error::new("a"))
            .unwrap()
            .append(Error::new("b"))
            .unwrap();

        let err = AppError::from(notification);
        assert_eq!(err.to_string(), "validation: a; b");
        assert_eq!(err.validation_errors(), &[Error::new("a"), Error::new("b")]);
    }

    #[test]
    fn non_validation_errors_have_no_validation_errors() {
        let err = AppError::NotFound("x".into());
        assert!(err.validation_errors().is_empty());
    }
}
