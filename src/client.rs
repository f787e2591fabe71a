use super::{error::Error, types::PutRecordOutput};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_kinesis::{primitives::Blob, Client as KdsClient};
use tokio::sync::OnceCell;

static SHARED: OnceCell<Client> = OnceCell::const_new();

#[derive(Debug, Clone)]
pub struct Client {
    kinesis: KdsClient,
}

impl Client {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            kinesis: KdsClient::new(config),
        }
    }
}

/// Return the process-wide client, loading the default AWS configuration on first use.
///
/// Every later call, including those from later invocations in the same process, reuses the
/// same client and its connection pool.
pub async fn shared() -> &'static Client {
    SHARED
        .get_or_init(|| async {
            let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            Client::new(&config)
        })
        .await
}

#[async_trait]
pub trait KinesisClient: Clone + Send + Sync {
    /// Append one record to the stream. Records sharing a partition key land on the same
    /// shard in the order they were put.
    async fn put_record(
        &self,
        stream_name: impl Into<String> + Send,
        data: Vec<u8>,
        partition_key: impl Into<String> + Send,
    ) -> Result<PutRecordOutput, Error>;
}

#[async_trait]
impl KinesisClient for Client {
    async fn put_record(
        &self,
        stream_name: impl Into<String> + Send,
        data: Vec<u8>,
        partition_key: impl Into<String> + Send,
    ) -> Result<PutRecordOutput, Error> {
        self.kinesis
            .put_record()
            .stream_name(stream_name)
            .data(Blob::new(data))
            .partition_key(partition_key)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| PutRecordOutput {
                shard_id: output.shard_id().to_string(),
                sequence_number: output.sequence_number().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shared_client_is_created_once() {
        // Keeps the default provider chain from probing instance metadata for a region.
        std::env::set_var("AWS_REGION", "us-east-1");

        let first = shared().await;
        let second = shared().await;

        assert!(std::ptr::eq(first, second));
    }
}
