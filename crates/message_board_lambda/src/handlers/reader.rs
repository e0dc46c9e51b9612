use message_board_core::contract::{ok_response, ApiGatewayResponse, SCAN_LIMIT};
use message_board_core::table::{MessageTable, ScanPage};
use serde_json::Value;

const COMPONENT: &str = "read_handler";

/// Scans one page of at most [`SCAN_LIMIT`] items and returns it verbatim.
///
/// The event is not inspected. A failed scan degrades to an empty page so the
/// caller always sees a 200.
pub async fn handle_read_event(_event: Value, table: &impl MessageTable) -> ApiGatewayResponse {
    let page = match table.scan(SCAN_LIMIT).await {
        Ok(page) => {
            tracing::info!(
                component = COMPONENT,
                event = "scan_completed",
                items = page.items.len(),
                has_more = page.last_evaluated_key.is_some()
            );
            page
        }
        Err(error) => {
            tracing::error!(
                component = COMPONENT,
                event = "scan_failed",
                error = %error
            );
            ScanPage::default()
        }
    };

    ok_response(serialize_page(&page))
}

fn serialize_page(page: &ScanPage) -> String {
    serde_json::to_string(page).unwrap_or_else(|error| {
        tracing::error!(
            component = COMPONENT,
            event = "serialization_failed",
            error = %error
        );
        serde_json::to_string(&ScanPage::default()).unwrap_or_default()
    })
}
