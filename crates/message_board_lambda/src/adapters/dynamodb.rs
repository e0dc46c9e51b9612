use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::operation::RequestId;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use base64::{engine::general_purpose, Engine as _};
use message_board_core::contract::Record;
use message_board_core::table::{Item, MessageTable, ResponseMetadata, ScanPage, TableError};
use serde_json::{Number, Value};

/// [`MessageTable`] backed by a DynamoDB table keyed on `id`.
#[derive(Debug, Clone)]
pub struct DynamoDbMessageTable {
    client: Client,
    table_name: String,
}

impl DynamoDbMessageTable {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl MessageTable for DynamoDbMessageTable {
    async fn scan(&self, limit: i32) -> Result<ScanPage, TableError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .send()
            .await
            .map_err(|error| TableError::Scan(DisplayErrorContext(&error).to_string()))?;

        Ok(scan_page_from_output(&output))
    }

    async fn put_record(&self, record: &Record) -> Result<(), TableError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(record.id.clone()))
            .item("message", AttributeValue::S(record.message.clone()))
            .send()
            .await
            .map(|_| ())
            .map_err(|error| TableError::Put(DisplayErrorContext(&error).to_string()))
    }
}

pub fn scan_page_from_output(output: &ScanOutput) -> ScanPage {
    ScanPage {
        items: output.items().iter().map(item_to_json).collect(),
        count: output.count(),
        scanned_count: output.scanned_count(),
        last_evaluated_key: output.last_evaluated_key().map(item_to_json),
        response_metadata: Some(ResponseMetadata {
            request_id: output.request_id().map(str::to_string),
            http_status_code: 200,
        }),
    }
}

pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Item {
    item.iter()
        .map(|(name, value)| (name.clone(), attribute_to_json(value)))
        .collect()
}

/// Renders a typed attribute as plain JSON. Numbers JSON cannot represent stay
/// strings and binary values become base64 text.
pub fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(text) => Value::String(text.clone()),
        AttributeValue::N(number) => number_to_json(number),
        AttributeValue::Bool(flag) => Value::Bool(*flag),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(general_purpose::STANDARD.encode(blob.as_ref())),
        AttributeValue::M(map) => Value::Object(item_to_json(map)),
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| number_to_json(n)).collect()),
        AttributeValue::Bs(set) => Value::Array(
            set.iter()
                .map(|blob| Value::String(general_purpose::STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

fn number_to_json(number: &str) -> Value {
    number
        .parse::<Number>()
        .map(Value::Number)
        .unwrap_or_else(|_| Value::String(number.to_string()))
}
