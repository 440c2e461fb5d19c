use serde::{Serialize, Serializer};
use std::fmt;

/// A numeric value as it flows through the calculator.
///
/// Integers stay integers through `add`/`subtract` so the reported payload
/// keeps `5` rather than `5.0`; any float operand turns the result into a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(v) => serializer.serialize_i64(v),
            // serde_json writes non-finite floats as `null`
            Number::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(i64::from(v))
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Divide,
}

impl Operation {
    /// Name used in the log payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of one remote log call. Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub struct OperationLog<'a> {
    pub operation: &'a str,
    pub result: Number,
}

/// Outcome of a best-effort log call. Callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The endpoint answered with a 2xx status.
    Sent { status: u16 },
    /// The endpoint answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request never got a response.
    Dropped { reason: DropReason },
    /// Logging is disabled for this logger.
    Skipped,
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The payload could not be encoded.
    Encode,
    /// The HTTP client could not be built.
    Client,
    Timeout,
    Connect,
    /// Any other transport failure (TLS, protocol, body).
    Transport,
}

impl DropReason {
    pub fn is_network(self) -> bool {
        matches!(
            self,
            DropReason::Timeout | DropReason::Connect | DropReason::Transport
        )
    }
}
