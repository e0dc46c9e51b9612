use chrono::{DateTime, Utc};
use message_board_core::body::extract_message;
use message_board_core::contract::{ok_response, ApiGatewayResponse, Record, WriteAcknowledgement};
use message_board_core::table::MessageTable;
use serde_json::Value;

const COMPONENT: &str = "write_handler";

/// Stores the event body as a new record and acknowledges with the invocation
/// time and the original event.
///
/// Persistence is best effort: an unusable body skips the write and a failed
/// write is logged, but the response is a 200 either way.
pub async fn handle_write_event(
    event: Value,
    table: &impl MessageTable,
    now: DateTime<Utc>,
) -> ApiGatewayResponse {
    match extract_message(&event) {
        Ok(message) => persist_message(message, table).await,
        Err(error) => {
            tracing::warn!(
                component = COMPONENT,
                event = "body_unusable",
                reason = error.reason(),
                error = %error
            );
        }
    }

    let acknowledgement = WriteAcknowledgement::new(now, event);
    let body = serde_json::to_string(&acknowledgement).unwrap_or_else(|error| {
        tracing::error!(
            component = COMPONENT,
            event = "serialization_failed",
            error = %error
        );
        String::from("{}")
    });
    ok_response(body)
}

async fn persist_message(message: String, table: &impl MessageTable) {
    let record = Record::new(message);
    match table.put_record(&record).await {
        Ok(()) => tracing::info!(
            component = COMPONENT,
            event = "record_persisted",
            id = %record.id
        ),
        Err(error) => tracing::error!(
            component = COMPONENT,
            event = "record_write_failed",
            id = %record.id,
            error = %error
        ),
    }
}
