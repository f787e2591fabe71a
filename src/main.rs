use dynamo_sync::{client, handler, types::DynamodbEvent, Config};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env()?;
    info!(
        "Publishing to {} with {} extraction and {} on remove",
        config.stream_name(),
        config.extraction_policy(),
        config.remove_policy(),
    );

    let config = &config;
    run(service_fn(move |event: LambdaEvent<DynamodbEvent>| async move {
        let client = client::shared().await;
        handler::handle(client, config, event.payload)
            .await
            .map_err(Error::from)
    }))
    .await
}
