use crate::domain::model::{Delivery, Number};
use async_trait::async_trait;

/// Destination for operation results.
///
/// Implementations are best-effort: they report what happened through
/// [`Delivery`] and never return an error.
#[async_trait]
pub trait OperationLogger: Send + Sync {
    async fn log_operation(&self, operation: &str, result: Number) -> Delivery;
}
