use super::Category;
use crate::validation::{Error, ValidationHandler, ValidationResult, Validator};
use rules::*;

/// 分类校验规则的限值与固定消息
pub mod rules {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 255;
    pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

    pub const NAME_EMPTY: &str = "'name' should not be empty";
    pub const NAME_LENGTH: &str = "'name' must be between 3 and 255 characters";
    pub const DESCRIPTION_LENGTH: &str = "'description' must be at most 4000 characters";
}

/// 分类校验器
///
/// 对分类只读、对处理器可写，每轮校验构造一次。名称规则与描述规则相互独立：
/// 在 `Notification` 下全部检查，在 `ThrowsValidationHandler` 下首个违反即返回。
pub struct CategoryValidator<'a, H> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H> CategoryValidator<'a, H>
where
    H: ValidationHandler,
{
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> ValidationResult<()> {
        let name = self.category.name().trim();
        if name.is_empty() {
            self.handler.append(Error::new(NAME_EMPTY))?;
            return Ok(());
        }

        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            self.handler.append(Error::new(NAME_LENGTH))?;
        }
        Ok(())
    }

    fn check_description_constraints(&mut self) -> ValidationResult<()> {
        let too_long = self
            .category
            .description()
            .is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LENGTH);
        if too_long {
            self.handler.append(Error::new(DESCRIPTION_LENGTH))?;
        }
        Ok(())
    }
}

impl<H> Validator for CategoryValidator<'_, H>
where
    H: ValidationHandler,
{
    fn validate(mut self) -> ValidationResult<()> {
        self.check_name_constraints()?;
        self.check_description_constraints()
    }
}
