use thiserror::Error as ThisError;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{event_name} notification has no {image}")]
    MissingImage {
        event_name: &'static str,
        image: &'static str,
    },
    #[error("not found attribute `{0}` in the image")]
    MissingAttribute(String),
    #[error("attribute `{name}` has unsupported type `{tag}`")]
    UnsupportedAttribute { name: String, tag: &'static str },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to serialize output record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("aws-sdk error: {0}")]
    SdkError(Box<dyn std::error::Error + Send + Sync + 'static>),
}
