use super::super::error::Error;

use std::collections::BTreeMap;

/// A flat row state derived from a change notification, ready to append to the ingest stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    partition_key: String,
    fields: BTreeMap<String, String>,
}

impl OutputRecord {
    pub fn new(partition_key: impl Into<String>, fields: BTreeMap<String, String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            fields,
        }
    }

    /// The key routing every change of the same row to the same shard.
    pub fn partition_key(&self) -> &str {
        self.partition_key.as_str()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Encode the record as the JSON object published to the stream.
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(&self.fields).map_err(Error::from)
    }
}

#[derive(Debug, Clone)]
pub struct PutRecordOutput {
    pub shard_id: String,
    pub sequence_number: String,
}
