mod attribute;
mod event;
mod outputs;

pub use attribute::{AttributeValue, Image};
pub use event::{ChangeNotification, DynamodbEvent, EventName, StreamRecord};
pub use outputs::{OutputRecord, PutRecordOutput};
