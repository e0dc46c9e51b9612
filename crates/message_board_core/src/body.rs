use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("invocation event must be a JSON object")]
    NotAnObject,
    #[error("invocation event has no body")]
    Missing,
}

impl BodyError {
    /// Short machine-readable tag for log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::Missing => "missing",
        }
    }
}

/// Pulls the message payload out of a gateway invocation event.
///
/// String bodies are stored exactly as delivered, including bodies the gateway
/// flags with `isBase64Encoded`. Direct invocations that pass a structured
/// body get its compact JSON text.
pub fn extract_message(event: &Value) -> Result<String, BodyError> {
    let object = event.as_object().ok_or(BodyError::NotAnObject)?;

    match object.get("body") {
        None | Some(Value::Null) => Err(BodyError::Missing),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
