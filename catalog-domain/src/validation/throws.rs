use super::{Error, Validation, ValidationHandler, ValidationResult, into_exception};
use crate::exception::DomainException;

/// 快速失败的校验处理器
///
/// 不保存错误列表（`errors()` 恒为空）：遇到的第一个错误即以 `DomainException`
/// 作为 `Err` 返回。终止后处理器记住该失败，之后的调用不再执行校验，直接返回同一失败。
#[derive(Debug, Clone, Default)]
pub struct ThrowsValidationHandler {
    aborted: Option<DomainException>,
}

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 本轮校验是否已被终止
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    fn abort(&mut self, exception: DomainException) -> DomainException {
        self.aborted = Some(exception.clone());
        exception
    }

    fn ensure_running(&self) -> ValidationResult<()> {
        match &self.aborted {
            Some(exception) => Err(exception.clone()),
            None => Ok(()),
        }
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: Error) -> ValidationResult<&mut Self> {
        self.ensure_running()?;
        Err(self.abort(DomainException::with(vec![error])))
    }

    fn merge<H>(&mut self, other: &H) -> ValidationResult<&mut Self>
    where
        H: ValidationHandler + ?Sized,
    {
        self.ensure_running()?;
        if other.has_error() {
            return Err(self.abort(DomainException::with(other.errors().to_vec())));
        }
        Ok(self)
    }

    fn validate<V>(&mut self, validation: V) -> ValidationResult<&mut Self>
    where
        V: Validation,
    {
        self.ensure_running()?;
        match validation.validate() {
            Ok(()) => Ok(self),
            Err(err) => Err(self.abort(into_exception(err))),
        }
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainResult;
    use crate::validation::{Notification, from_fn};
    use std::cell::Cell;

    fn failing(message: &'static str) -> impl Validation {
        from_fn(move || Err(DomainException::with(vec![Error::new(message)]).into()))
    }

    #[test]
    fn passing_validations_keep_the_handler_clean() {
        let mut handler = ThrowsValidationHandler::new();
        handler
            .validate(from_fn(|| Ok(())))
            .unwrap()
            .validate(from_fn(|| Ok(())))
            .unwrap();

        assert!(!handler.has_error());
        assert!(!handler.is_aborted());
    }

    #[test]
    fn append_fails_immediately_with_that_error() {
        let mut handler = ThrowsValidationHandler::new();
        let ex = handler.append(Error::new("boom")).unwrap_err();

        assert_eq!(ex.errors(), &[Error::new("boom")]);
        assert!(handler.errors().is_empty());
        assert!(!handler.has_error());
    }

    #[test]
    fn first_failure_aborts_and_later_validations_do_not_run() {
        let ran_after = Cell::new(0);
        let mut handler = ThrowsValidationHandler::new();

        let outcome = (|| -> ValidationResult<()> {
            handler.validate(from_fn(|| Ok(())))?;
            handler.validate(failing("first"))?;
            handler.validate(from_fn(|| {
                ran_after.set(ran_after.get() + 1);
                Ok(())
            }))?;
            Ok(())
        })();

        let ex = outcome.unwrap_err();
        assert_eq!(ex.errors(), &[Error::new("first")]);
        assert_eq!(ran_after.get(), 0);
    }

    #[test]
    fn aborted_handler_short_circuits_even_if_caller_continues() {
        let ran = Cell::new(false);
        let mut handler = ThrowsValidationHandler::new();
        let _ = handler.validate(failing("first"));
        assert!(handler.is_aborted());

        let again = handler
            .validate(from_fn(|| {
                ran.set(true);
                Ok(())
            }))
            .unwrap_err();

        assert!(!ran.get());
        assert_eq!(again.errors(), &[Error::new("first")]);
        assert_eq!(
            handler.append(Error::new("second")).unwrap_err().errors(),
            &[Error::new("first")]
        );
    }

    #[test]
    fn domain_exception_is_returned_unchanged() {
        let mut handler = ThrowsValidationHandler::new();
        let ex = handler
            .validate(from_fn(|| {
                Err(DomainException::with(vec![Error::new("x"), Error::new("y")]).into())
            }))
            .unwrap_err();

        assert_eq!(ex.errors(), &[Error::new("x"), Error::new("y")]);
    }

    #[test]
    fn unexpected_failure_is_wrapped_into_single_error() {
        let mut handler = ThrowsValidationHandler::new();
        let ex = handler
            .validate(from_fn(|| Err(anyhow::anyhow!("disk on fire"))))
            .unwrap_err();

        assert_eq!(ex.errors(), &[Error::new("disk on fire")]);
    }

    #[test]
    fn exception_inside_domain_error_is_returned_unchanged() {
        let mut handler = ThrowsValidationHandler::new();
        let ex = handler
            .validate(from_fn(|| {
                let rule: DomainResult<()> =
                    Err(DomainException::with(vec![Error::new("a"), Error::new("b")]).into());
                rule?;
                Ok(())
            }))
            .unwrap_err();

        assert_eq!(ex.errors(), &[Error::new("a"), Error::new("b")]);
        assert!(handler.is_aborted());
    }

    #[test]
    fn merge_fails_with_all_errors_of_the_other_handler() {
        let mut collected = Notification::create();
        collected
            .append(Error::new("a"))
            .unwrap()
            .append(Error::new("b"))
            .unwrap();

        let mut handler = ThrowsValidationHandler::new();
        let ex = handler.merge(&collected).unwrap_err();
        assert_eq!(ex.errors(), &[Error::new("a"), Error::new("b")]);
    }

    #[test]
    fn merge_with_clean_handler_passes() {
        let mut handler = ThrowsValidationHandler::new();
        assert!(handler.merge(&Notification::create()).is_ok());
        assert!(!handler.is_aborted());
    }
}
