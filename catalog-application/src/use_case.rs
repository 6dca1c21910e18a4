use crate::error::AppError;
use async_trait::async_trait;

/// 应用层用例（Use Case）
///
/// 编排一次完整的业务操作：选择校验处理器、驱动聚合自校验、调用网关并组装输出。
/// - `In`：用例输入（命令或查询参数）；
/// - `Out`：用例输出，通常为 [`Dto`](crate::dto::Dto)。
#[async_trait]
pub trait UseCase<In, Out>: Send + Sync
where
    In: Send + 'static,
{
    async fn execute(&self, input: In) -> Result<Out, AppError>;
}
