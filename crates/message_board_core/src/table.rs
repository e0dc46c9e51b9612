use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::contract::Record;

/// One table item with its attributes rendered as plain JSON.
pub type Item = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("scan failed: {0}")]
    Scan(String),
    #[error("put failed: {0}")]
    Put(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResponseMetadata {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
}

/// A single scan page in the store's own response shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ScanPage {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub scanned_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ScanPage {
    pub fn from_items(items: Vec<Item>) -> Self {
        let count = i32::try_from(items.len()).unwrap_or(i32::MAX);
        Self {
            items,
            count,
            scanned_count: count,
            last_evaluated_key: None,
            response_metadata: None,
        }
    }
}

/// The backing key-value table shared by the reader and the writer.
pub trait MessageTable {
    /// Returns at most `limit` items in whatever order the store yields them.
    fn scan(&self, limit: i32) -> impl Future<Output = Result<ScanPage, TableError>> + Send;

    fn put_record(&self, record: &Record) -> impl Future<Output = Result<(), TableError>> + Send;
}
