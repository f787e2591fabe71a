use super::{
    client::KinesisClient,
    config::Config,
    error::Error,
    transform::transform,
    types::DynamodbEvent,
};

use std::fmt;
use tracing::{debug, error, info};

/// Counts of one processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Notifications evaluated, always the length of the batch.
    pub processed: usize,
    /// Records published to the ingest stream.
    pub published: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully processed {} records.", self.processed)
    }
}

/// Transform every notification of the batch in delivery order and publish each produced
/// record to the configured stream.
///
/// The first failure aborts the batch. Records already published stay published, so the
/// redelivered batch yields duplicates downstream.
pub async fn process<Client>(
    client: &Client,
    config: &Config,
    event: DynamodbEvent,
) -> Result<BatchSummary, Error>
where
    Client: KinesisClient,
{
    let DynamodbEvent { records } = event;
    info!("Received {} change notifications", records.len());

    let mut published = 0;

    for notification in records.iter() {
        debug!(
            event_id = notification.event_id.as_deref().unwrap_or_default(),
            event_name = %notification.event_name,
            sequence_number = notification.dynamodb.sequence_number.as_deref().unwrap_or_default(),
            "DynamoDB record",
        );

        let record = match transform(config, notification) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(err) => {
                error!("Failed to transform {} notification: {err}", notification.event_name);
                return Err(err);
            }
        };

        let output = client
            .put_record(
                config.stream_name(),
                record.to_json()?,
                record.partition_key(),
            )
            .await
            .map_err(|err| {
                error!(
                    "Failed to put record `{}` to {}: {err}",
                    record.partition_key(),
                    config.stream_name(),
                );
                err
            })?;

        debug!(
            partition_key = record.partition_key(),
            shard_id = %output.shard_id,
            sequence_number = %output.sequence_number,
            "Put record",
        );
        published += 1;
    }

    let summary = BatchSummary {
        processed: records.len(),
        published,
    };
    info!(
        "Published {} of {} records to {}",
        summary.published,
        summary.processed,
        config.stream_name(),
    );

    Ok(summary)
}

/// Lambda entry point: process the batch and report the number of notifications evaluated.
pub async fn handle<Client>(
    client: &Client,
    config: &Config,
    event: DynamodbEvent,
) -> Result<String, Error>
where
    Client: KinesisClient,
{
    process(client, config, event)
        .await
        .map(|summary| summary.to_string())
}
