use aws_config::{retry::RetryConfig, BehaviorVersion, Region, SdkConfig};
use aws_credential_types::{provider::SharedCredentialsProvider, Credentials};
use aws_sdk_kinesis::{types::ShardIteratorType, Client};
use dynamo_sync::types::DynamodbEvent;
use serde_json::{json, Value};
use tokio::time::{sleep, Duration};
use ulid::Ulid;

pub struct TestConfig {
    stream_name: String,
    config: SdkConfig,
}

impl TestConfig {
    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn aws_sdk_config(&self) -> &SdkConfig {
        &self.config
    }
}

/// Create a one-shard stream on the Kinesis instance running on localhost:4567.
pub async fn setup() -> TestConfig {
    let creds = Credentials::from_keys(Ulid::new(), Ulid::new(), None);
    let creds_provider = SharedCredentialsProvider::new(creds);

    let retry = RetryConfig::standard().with_max_attempts(5);

    let config = SdkConfig::builder()
        .endpoint_url("http://localhost:4567")
        .credentials_provider(creds_provider)
        .retry_config(retry)
        .behavior_version(BehaviorVersion::latest())
        .region(Some(Region::from_static("us-east-1")))
        .build();

    let stream_name = format!("ingest-{}", Ulid::new().to_string().to_lowercase());
    create_stream(&stream_name, &config).await;

    TestConfig {
        stream_name,
        config,
    }
}

pub async fn teardown(config: TestConfig) {
    Client::new(&config.config)
        .delete_stream()
        .stream_name(&config.stream_name)
        .send()
        .await
        .unwrap();
}

pub fn event(records: Value) -> DynamodbEvent {
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

/// Read every record from the shard, returning the partition key and decoded payload.
pub async fn read_shard(
    stream_name: &str,
    shard_id: &str,
    config: &SdkConfig,
) -> Vec<(String, Value)> {
    let client = Client::new(config);

    let mut iterator = client
        .get_shard_iterator()
        .stream_name(stream_name)
        .shard_id(shard_id)
        .shard_iterator_type(ShardIteratorType::TrimHorizon)
        .send()
        .await
        .unwrap()
        .shard_iterator;

    let mut records = vec![];

    while let Some(current) = iterator.take() {
        let output = client
            .get_records()
            .shard_iterator(current)
            .send()
            .await
            .unwrap();

        if output.records().is_empty() {
            break;
        }

        for record in output.records() {
            let data = serde_json::from_slice(record.data().as_ref()).unwrap();
            records.push((record.partition_key().unwrap_or_default().to_string(), data));
        }

        iterator = output.next_shard_iterator;
    }

    records
}

async fn create_stream(stream_name: &str, config: &SdkConfig) {
    let client = Client::new(config);

    client
        .create_stream()
        .stream_name(stream_name)
        .shard_count(1)
        .send()
        .await
        .unwrap();

    // Shards are listed once the stream leaves the CREATING state.
    loop {
        let ready = client
            .list_shards()
            .stream_name(stream_name)
            .send()
            .await
            .map(|output| !output.shards().is_empty())
            .unwrap_or(false);

        if ready {
            return;
        }

        sleep(Duration::from_millis(100)).await;
    }
}
