use catalog_macros::entity_id;
use uuid::Uuid;

/// 分类标识
#[entity_id]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// 生成新的唯一标识（UUID v4）
    pub fn unique() -> Self {
        Self::new(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn unique_ids_differ() {
        assert_ne!(CategoryId::unique(), CategoryId::unique());
    }

    #[test]
    fn parses_its_own_display() {
        let id = CategoryId::unique();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn invalid_text_is_a_parse_error() {
        let err: DomainError = "fake id".parse::<CategoryId>().unwrap_err().into();
        assert!(matches!(err, DomainError::Parse { .. }));
    }
}
