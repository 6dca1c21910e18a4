use catalog_macros::value_object;
use std::fmt;

/// 单条校验失败信息
///
/// 不可变、无标识，以消息内容判等；可直接序列化为 `{"message": "..."}` 返回给调用方。
#[value_object]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_compare_by_message() {
        assert_eq!(Error::new("a"), Error::new("a".to_string()));
        assert_ne!(Error::new("a"), Error::new("b"));
    }

    #[test]
    fn serializes_as_message_object() {
        let json = serde_json::to_string(&Error::new("'name' should not be empty")).unwrap();
        assert_eq!(json, r#"{"message":"'name' should not be empty"}"#);

        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message(), "'name' should not be empty");
    }
}
