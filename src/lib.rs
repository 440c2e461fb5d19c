pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::LoggerConfig;
pub use crate::core::{
    arithmetic::{add, divide, subtract},
    calculator::Calculator,
    remote_logger::{log_operation, NoopLogger, RemoteLogger},
};
pub use domain::model::{Delivery, DropReason, Number, Operation, OperationLog};
pub use domain::ports::OperationLogger;
pub use utils::error::{CalcError, Result};
