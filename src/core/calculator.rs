use crate::core::arithmetic;
use crate::core::remote_logger::NoopLogger;
use crate::core::{Number, Operation, OperationLogger};
use crate::utils::error::Result;

/// Runs an operation, then hands its result to a logger.
///
/// The logger's [`Delivery`](crate::Delivery) is discarded; a failed
/// `divide` is returned to the caller and nothing is logged.
pub struct Calculator<L: OperationLogger> {
    logger: L,
}

impl Calculator<NoopLogger> {
    pub fn offline() -> Self {
        Self::new(NoopLogger)
    }
}

impl<L: OperationLogger> Calculator<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub async fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let result = arithmetic::add(a, b);
        self.report(Operation::Add, result).await;
        result
    }

    pub async fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let result = arithmetic::subtract(a, b);
        self.report(Operation::Subtract, result).await;
        result
    }

    pub async fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
        let result = arithmetic::divide(a, b)?;
        self.report(Operation::Divide, result).await;
        Ok(result)
    }

    async fn report(&self, operation: Operation, result: Number) {
        let _ = self.logger.log_operation(operation.as_str(), result).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Delivery;
    use crate::utils::error::CalcError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        calls: Mutex<Vec<(String, Number)>>,
    }

    #[async_trait]
    impl OperationLogger for RecordingLogger {
        async fn log_operation(&self, operation: &str, result: Number) -> Delivery {
            self.calls
                .lock()
                .unwrap()
                .push((operation.to_string(), result));
            Delivery::Rejected { status: 500 }
        }
    }

    #[tokio::test]
    async fn test_each_operation_is_logged_once() {
        let calc = Calculator::new(RecordingLogger::default());

        assert_eq!(calc.add(2, 3).await, Number::Int(5));
        assert_eq!(calc.subtract(10, 4).await, Number::Int(6));
        assert_eq!(calc.divide(9, 3).await.unwrap(), Number::Float(3.0));

        let calls = calc.logger().calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("add".to_string(), Number::Int(5)),
                ("subtract".to_string(), Number::Int(6)),
                ("divide".to_string(), Number::Float(3.0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_divide_is_not_logged() {
        let calc = Calculator::new(RecordingLogger::default());

        let err = calc.divide(5, 0).await.unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { .. }));
        assert!(calc.logger().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offline_calculator() {
        let calc = Calculator::offline();
        assert_eq!(calc.add(1.5, 1.5).await, Number::Float(3.0));
    }
}
