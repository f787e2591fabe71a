pub use serde_dynamo::AttributeValue;

use std::collections::HashMap;

/// An attribute name to typed value mapping, as carried by `Keys`, `NewImage` and `OldImage`.
pub type Image = HashMap<String, AttributeValue>;
