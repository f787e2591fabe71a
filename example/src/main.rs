use aws_config::BehaviorVersion;
use dynamo_sync::{handler, types::DynamodbEvent, Client, Config};

// This example assumes that a Kinesis instance is running on localhost:4567
// and "sync_stack_ingest_stream" stream exists.
//
// Usage: cargo run -- events/batch.json

#[tokio::main]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "events/batch.json".to_string());
    let file = std::fs::File::open(&path).expect("event file is readable");
    let event: DynamodbEvent = serde_json::from_reader(file).expect("event file is a batch");

    let config = aws_config::load_defaults(BehaviorVersion::latest())
        .await
        .into_builder()
        .endpoint_url("http://localhost:4567")
        .build();

    let client = Client::new(&config);
    let sync_config = Config::from_env().expect("valid configuration");

    match handler::handle(&client, &sync_config, event).await {
        Ok(message) => println!("{message}"),
        Err(err) => eprintln!("{err}"),
    }
}
