//! Request validation at the handler boundary.

use crate::error::AppError;
use crate::model::DataInput;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Turn an arbitrary JSON body into a [`DataInput`]. The body must be an object
    /// whose `value` is a string that is not blank.
    pub fn data_input(body: Value) -> Result<DataInput, AppError> {
        let mut map = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::Validation("body must be a JSON object".into())),
        };
        match map.remove("value") {
            Some(Value::String(s)) => {
                validate_value(&s)?;
                Ok(DataInput { value: s })
            }
            Some(Value::Null) | None => Err(AppError::Validation("value is required".into())),
            Some(_) => Err(AppError::Validation("value must be a string".into())),
        }
    }
}

/// Reject empty and whitespace-only values.
pub fn validate_value(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation("value cannot be empty".into()));
    }
    Ok(())
}
