//! Calculator request validation and evaluation.
//!
//! This is the one piece of real logic in the service: turn an arbitrary
//! JSON body into a validated `(a, b, operation)` triple, evaluate it, and
//! produce a timestamped result. All failures map onto the
//! [`ApiError`](crate::error::ApiError) taxonomy.

use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::{ApiError, Result};

/// Supported arithmetic operations.
///
/// Operation names are matched case-sensitively: `"add"` parses, `"Add"`
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// a + b
    Add,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a / b (rejects b == 0)
    Divide,
    /// a raised to the power b
    Power,
}

impl Operation {
    /// Apply the operation to two operands.
    ///
    /// The zero-divisor check happens before the division itself, so a
    /// divide-by-zero never reaches floating-point and never produces
    /// infinity or NaN.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    return Err(ApiError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operation::Power => Ok(a.powf(b)),
        }
    }
}

/// A validated calculation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// First operand.
    pub a: f64,
    /// Second operand.
    pub b: f64,
    /// Operation to perform.
    pub operation: Operation,
}

/// Successful calculation result.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    /// Numeric result.
    pub result: f64,
    /// Human-readable expression, e.g. `"5 add 3 = 8"`.
    pub operation: String,
    /// UTC timestamp (RFC 3339), captured at response construction.
    pub timestamp: String,
}

/// Coerce an arbitrary JSON value to a float.
///
/// JSON numbers convert directly; strings convert if they parse as a
/// number. Booleans, null, arrays and objects are rejected; `true` is
/// never treated as `1.0`.
fn coerce_number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(ApiError::InvalidType),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| ApiError::InvalidType),
        _ => Err(ApiError::InvalidType),
    }
}

/// True if the `operation` field counts as absent: missing, null, or any
/// falsy JSON value (empty string, `false`, zero, empty array/object).
fn operation_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Parse and validate a raw request body into a [`CalculationRequest`].
///
/// Validation order matches the API contract: body shape first, then
/// parameter presence, then numeric coercion, then operation dispatch.
pub fn parse_request(body: &[u8]) -> Result<CalculationRequest> {
    let data: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidRequest)?;

    let map = match &data {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ApiError::InvalidRequest),
    };

    let a = map.get("a");
    let b = map.get("b");
    let operation = map.get("operation");

    let absent = |v: Option<&Value>| matches!(v, None | Some(Value::Null));
    if absent(a) || absent(b) || operation_missing(operation) {
        return Err(ApiError::MissingParameters);
    }

    let a = coerce_number(a.unwrap_or(&Value::Null))?;
    let b = coerce_number(b.unwrap_or(&Value::Null))?;

    let operation = operation
        .and_then(Value::as_str)
        .ok_or(ApiError::UnsupportedOperation)?
        .parse::<Operation>()
        .map_err(|_| ApiError::UnsupportedOperation)?;

    Ok(CalculationRequest { a, b, operation })
}

/// Evaluate a validated request into a timestamped response.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResponse> {
    let result = request.operation.apply(request.a, request.b)?;

    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(CalculationResponse {
        result,
        operation: format!(
            "{} {} {} = {}",
            request.a, request.operation, request.b, result
        ),
        timestamp,
    })
}
