use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use message_board_core::contract::ApiGatewayResponse;
use message_board_lambda::adapters::dynamodb::DynamoDbMessageTable;
use message_board_lambda::config::MessageTableConfig;
use message_board_lambda::handlers::router::handle_gateway_event;
use serde_json::Value;

async fn handle_request(
    table: &DynamoDbMessageTable,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_gateway_event(event.payload, table, Utc::now()).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = MessageTableConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table = DynamoDbMessageTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    );
    tracing::info!(table = table.table_name(), "message runtime starting");

    lambda_runtime::run(service_fn(|event| handle_request(&table, event))).await
}
