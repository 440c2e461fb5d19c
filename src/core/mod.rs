pub mod arithmetic;
pub mod calculator;
pub mod remote_logger;

pub use crate::domain::model::{Delivery, DropReason, Number, Operation, OperationLog};
pub use crate::domain::ports::OperationLogger;
pub use crate::utils::error::Result;
