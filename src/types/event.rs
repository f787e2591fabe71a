use super::Image;

use serde::Deserialize;
use std::fmt;

/// The payload the Lambda runtime delivers for a DynamoDB Streams event source.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamodbEvent {
    pub records: Vec<ChangeNotification>,
}

/// One mutation to one row of the source table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    pub event_name: EventName,
    pub dynamodb: StreamRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventName {
    Insert,
    Modify,
    Remove,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Modify => "MODIFY",
            Self::Remove => "REMOVE",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamRecord {
    pub keys: Option<Image>,
    pub new_image: Option<Image>,
    pub old_image: Option<Image>,
    pub sequence_number: Option<String>,
}
