//! Best-effort reporting of operation results to the analytics endpoint.
//!
//! Every call makes at most one POST and never fails: whatever happens is
//! folded into a [`Delivery`] that the caller is free to drop.

use crate::config::LoggerConfig;
use crate::core::{Delivery, DropReason, Number, OperationLog, OperationLogger};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::io;

/// Sends one operation result with the default endpoint and timeout.
pub async fn log_operation(operation: &str, result: impl Into<Number>) -> Delivery {
    match RemoteLogger::new(LoggerConfig::default()) {
        Ok(logger) => logger.send(operation, result.into()).await,
        Err(_) => Delivery::Dropped {
            reason: DropReason::Client,
        },
    }
}

#[derive(Debug, Clone)]
pub struct RemoteLogger {
    client: Client,
    endpoint: String,
}

impl RemoteLogger {
    pub fn new(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, operation: &str, result: Number) -> Delivery {
        let body = match encode_payload(&OperationLog { operation, result }) {
            Ok(body) => body,
            Err(_) => {
                return Delivery::Dropped {
                    reason: DropReason::Encode,
                }
            }
        };

        tracing::debug!("Sending operation log to {}: {} = {}", self.endpoint, operation, result);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Delivery::Sent {
                        status: status.as_u16(),
                    }
                } else {
                    Delivery::Rejected {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => Delivery::Dropped {
                reason: classify(&e),
            },
        }
    }
}

#[async_trait]
impl OperationLogger for RemoteLogger {
    async fn log_operation(&self, operation: &str, result: Number) -> Delivery {
        self.send(operation, result).await
    }
}

/// Logger that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

#[async_trait]
impl OperationLogger for NoopLogger {
    async fn log_operation(&self, _operation: &str, _result: Number) -> Delivery {
        Delivery::Skipped
    }
}

fn classify(err: &reqwest::Error) -> DropReason {
    if err.is_timeout() {
        DropReason::Timeout
    } else if err.is_connect() {
        DropReason::Connect
    } else if err.is_builder() {
        DropReason::Client
    } else {
        DropReason::Transport
    }
}

/// Encodes `value` as JSON with a space after every `:` and `,`,
/// e.g. `{"operation": "add", "result": 5}`.
pub fn encode_payload<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn encode(operation: &str, result: Number) -> String {
        String::from_utf8(encode_payload(&OperationLog { operation, result }).unwrap()).unwrap()
    }

    #[test]
    fn test_payload_encoding() {
        assert_eq!(encode("add", Number::Int(5)), r#"{"operation": "add", "result": 5}"#);
        assert_eq!(
            encode("divide", Number::Float(3.0)),
            r#"{"operation": "divide", "result": 3.0}"#
        );
        assert_eq!(
            encode("subtract", Number::Int(-6)),
            r#"{"operation": "subtract", "result": -6}"#
        );
    }

    #[test]
    fn test_payload_escapes_operation_name() {
        assert_eq!(
            encode("a\"b", Number::Int(1)),
            r#"{"operation": "a\"b", "result": 1}"#
        );
    }

    #[test]
    fn test_spaced_formatter_arrays() {
        let body = encode_payload(&serde_json::json!([1, 2, 3])).unwrap();
        assert_eq!(String::from_utf8(body).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(RemoteLogger::new(LoggerConfig::new("ftp://example.com/log")).is_err());
        assert!(RemoteLogger::new(LoggerConfig::default().with_timeout(Duration::ZERO)).is_err());
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let logger = RemoteLogger::new(LoggerConfig::default()).unwrap();
        assert_eq!(logger.endpoint(), "https://analytics.example.com/api/log");
    }

    #[tokio::test]
    async fn test_noop_logger_skips() {
        let delivery = NoopLogger.log_operation("add", Number::Int(5)).await;
        assert_eq!(delivery, Delivery::Skipped);
    }
}
