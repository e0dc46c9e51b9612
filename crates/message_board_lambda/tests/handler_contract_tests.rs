use chrono::{NaiveDateTime, Utc};
use message_board_core::contract::{cors_headers, ApiGatewayResponse, SCAN_LIMIT};
use message_board_core::test_helpers::InMemoryMessageTable;
use message_board_lambda::handlers::reader::handle_read_event;
use message_board_lambda::handlers::writer::handle_write_event;
use serde_json::{json, Value};

fn parse_body(response: &ApiGatewayResponse) -> Value {
    serde_json::from_str(&response.body).expect("response body should be json")
}

fn assert_ok_envelope(response: &ApiGatewayResponse) {
    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers, cors_headers());
}

fn assert_invocation_time(time: &Value) {
    let text = time.as_str().expect("time should be a string");
    let stamp = text
        .strip_prefix("lambda ")
        .expect("time should carry the lambda prefix");
    NaiveDateTime::parse_from_str(stamp, "%Y/%m/%d %H:%M:%S%.6f")
        .expect("time should match YYYY/MM/DD HH:MM:SS.ffffff");
    let fraction = stamp.rsplit('.').next().expect("fractional seconds");
    assert_eq!(fraction.len(), 6);
}

#[tokio::test]
async fn reader_returns_every_item_of_a_small_table() {
    let table = InMemoryMessageTable::seeded(7);

    let response = handle_read_event(json!({}), &table).await;

    assert_ok_envelope(&response);
    let body = parse_body(&response);
    let items = body["Items"].as_array().expect("Items should be a list");
    assert_eq!(items.len(), 7);
    assert_eq!(body["Count"], 7);
    assert!(body.get("LastEvaluatedKey").is_none());
}

#[tokio::test]
async fn reader_caps_large_tables_at_one_page() {
    let table = InMemoryMessageTable::seeded(120);

    let response = handle_read_event(json!({"httpMethod": "GET"}), &table).await;

    assert_ok_envelope(&response);
    let body = parse_body(&response);
    let items = body["Items"].as_array().expect("Items should be a list");
    assert_eq!(items.len(), SCAN_LIMIT as usize);
    assert!(body.get("LastEvaluatedKey").is_some());
    assert_eq!(table.scan_calls(), 1);
}

#[tokio::test]
async fn reader_handles_exactly_the_limit() {
    let table = InMemoryMessageTable::seeded(50);

    let body = parse_body(&handle_read_event(json!({}), &table).await);

    assert_eq!(body["Items"].as_array().map(Vec::len), Some(50));
}

#[tokio::test]
async fn reader_degrades_to_empty_items_on_scan_failure() {
    let table = InMemoryMessageTable::seeded(3).failing_scans();

    let response = handle_read_event(json!({}), &table).await;

    assert_ok_envelope(&response);
    assert_eq!(parse_body(&response)["Items"], json!([]));
}

#[tokio::test]
async fn writer_without_body_does_not_persist() {
    let table = InMemoryMessageTable::new();
    let event = json!({"httpMethod": "POST", "headers": {"Content-Type": "application/json"}});

    let response = handle_write_event(event.clone(), &table, Utc::now()).await;

    assert_ok_envelope(&response);
    assert_eq!(table.put_calls(), 0);
    let body = parse_body(&response);
    assert_eq!(body["event"], event);
    assert_invocation_time(&body["time"]);
}

#[tokio::test]
async fn writer_persists_one_record_per_body() {
    let table = InMemoryMessageTable::new();
    let event = json!({"body": "hello"});

    let response = handle_write_event(event.clone(), &table, Utc::now()).await;

    assert_ok_envelope(&response);
    let records = table.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "hello");

    let body = parse_body(&response);
    assert_eq!(body["event"], event);
    assert_invocation_time(&body["time"]);
}

#[tokio::test]
async fn writer_ids_are_unique_across_invocations() {
    let table = InMemoryMessageTable::new();

    for n in 0..25 {
        handle_write_event(json!({"body": format!("message {n}")}), &table, Utc::now()).await;
    }

    let mut ids: Vec<String> = table.records().into_iter().map(|record| record.id).collect();
    assert_eq!(ids.len(), 25);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[tokio::test]
async fn writer_swallows_store_failures() {
    let table = InMemoryMessageTable::new().failing_puts();
    let event = json!({"body": "hello"});

    let response = handle_write_event(event.clone(), &table, Utc::now()).await;

    assert_ok_envelope(&response);
    assert_eq!(table.put_calls(), 1);
    assert!(table.records().is_empty());
    assert_eq!(parse_body(&response)["event"], event);
}

#[tokio::test]
async fn written_messages_are_visible_to_the_reader() {
    let table = InMemoryMessageTable::new();

    handle_write_event(json!({"body": "first"}), &table, Utc::now()).await;
    handle_write_event(json!({"body": null}), &table, Utc::now()).await;
    handle_write_event(json!({"body": "second"}), &table, Utc::now()).await;

    let body = parse_body(&handle_read_event(json!({}), &table).await);
    let messages: Vec<&str> = body["Items"]
        .as_array()
        .expect("Items should be a list")
        .iter()
        .filter_map(|item| item["message"].as_str())
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
}
