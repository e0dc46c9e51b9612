use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Maximum number of items returned by a single read. No continuation is followed.
pub const SCAN_LIMIT: i32 = 50;

pub const TIME_PREFIX: &str = "lambda";
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const ALLOW_METHODS: &str = "OPTIONS,GET";

/// The persisted unit. `id` is the table's partition key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub message: String,
}

impl Record {
    /// Builds a record keyed by a freshly generated v4 UUID.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Body of the writer's response: when the invocation ran and what it received.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WriteAcknowledgement {
    pub time: String,
    pub event: Value,
}

impl WriteAcknowledgement {
    pub fn new(now: DateTime<Utc>, event: Value) -> Self {
        Self {
            time: format_invocation_time(now),
            event,
        }
    }
}

/// Renders `now` as `lambda YYYY/MM/DD HH:MM:SS.ffffff`.
pub fn format_invocation_time(now: DateTime<Utc>) -> String {
    format!("{TIME_PREFIX} {}", now.format(TIMESTAMP_FORMAT))
}

pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": ALLOW_ORIGIN,
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
        "Access-Control-Allow-Methods": ALLOW_METHODS,
    })
}

/// Wraps an already-serialized body in a 200 envelope carrying the CORS headers.
pub fn ok_response(body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: cors_headers(),
        body,
    }
}

/// Answer to a CORS preflight request.
pub fn preflight_response() -> ApiGatewayResponse {
    ok_response(String::new())
}
