use chrono::{DateTime, Utc};
use message_board_core::contract::{preflight_response, ApiGatewayResponse};
use message_board_core::table::MessageTable;
use serde_json::Value;

use crate::handlers::reader::handle_read_event;
use crate::handlers::writer::handle_write_event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Read,
    Write,
    Preflight,
}

/// Picks a handler from the request method of a REST (`httpMethod`) or HTTP API
/// (`requestContext.http.method`) event.
///
/// Non-proxy passthrough integrations deliver the client JSON without a method,
/// so a method-less event carrying a `body` key is a write and any other is a read.
pub fn route_for(event: &Value) -> Route {
    let method = event
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            event
                .pointer("/requestContext/http/method")
                .and_then(Value::as_str)
        });

    match method {
        Some(method) if method.eq_ignore_ascii_case("POST") => Route::Write,
        Some(method) if method.eq_ignore_ascii_case("OPTIONS") => Route::Preflight,
        Some(_) => Route::Read,
        None if event.get("body").is_some() => Route::Write,
        None => Route::Read,
    }
}

/// Serves both message routes from a single function.
pub async fn handle_gateway_event(
    event: Value,
    table: &impl MessageTable,
    now: DateTime<Utc>,
) -> ApiGatewayResponse {
    let route = route_for(&event);
    tracing::debug!(component = "router", route = ?route);

    match route {
        Route::Read => handle_read_event(event, table).await,
        Route::Write => handle_write_event(event, table, now).await,
        Route::Preflight => preflight_response(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use message_board_core::test_helpers::InMemoryMessageTable;
    use serde_json::json;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 12, 3, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn routes_rest_events_by_http_method() {
        assert_eq!(route_for(&json!({"httpMethod": "POST"})), Route::Write);
        assert_eq!(route_for(&json!({"httpMethod": "GET"})), Route::Read);
        assert_eq!(route_for(&json!({"httpMethod": "OPTIONS"})), Route::Preflight);
    }

    #[test]
    fn routes_http_api_events_by_request_context() {
        let event = json!({"requestContext": {"http": {"method": "post"}}, "body": "hi"});
        assert_eq!(route_for(&event), Route::Write);
    }

    #[test]
    fn events_without_method_or_body_are_reads() {
        assert_eq!(route_for(&json!({})), Route::Read);
        assert_eq!(route_for(&Value::Null), Route::Read);
    }

    #[test]
    fn passthrough_events_with_body_are_writes() {
        assert_eq!(route_for(&json!({"body": "hello"})), Route::Write);
        assert_eq!(route_for(&json!({"body": null})), Route::Write);
    }

    #[test]
    fn explicit_get_with_body_is_still_a_read() {
        assert_eq!(
            route_for(&json!({"httpMethod": "GET", "body": "ignored"})),
            Route::Read
        );
    }

    #[tokio::test]
    async fn passthrough_post_persists_the_body() {
        let table = InMemoryMessageTable::new();

        let response = handle_gateway_event(json!({"body": "hello"}), &table, fixed_now()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(table.put_calls(), 1);
        assert_eq!(table.scan_calls(), 0);
        let records = table.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello");
    }

    #[tokio::test]
    async fn preflight_touches_nothing() {
        let table = InMemoryMessageTable::new();

        let response =
            handle_gateway_event(json!({"httpMethod": "OPTIONS"}), &table, fixed_now()).await;

        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());
        assert_eq!(table.scan_calls(), 0);
        assert_eq!(table.put_calls(), 0);
    }

    #[tokio::test]
    async fn post_then_get_round_trips_through_table() {
        let table = InMemoryMessageTable::new();

        handle_gateway_event(
            json!({"httpMethod": "POST", "body": "hello"}),
            &table,
            fixed_now(),
        )
        .await;
        let response =
            handle_gateway_event(json!({"httpMethod": "GET"}), &table, fixed_now()).await;

        let body: Value = serde_json::from_str(&response.body).expect("body should be json");
        assert_eq!(body["Items"][0]["message"], "hello");
        assert_eq!(table.put_calls(), 1);
        assert_eq!(table.scan_calls(), 1);
    }
}
