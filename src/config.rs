use super::{
    error::Error,
    policy::{ExtractionPolicy, RemovePolicy},
};

pub const DEFAULT_STREAM_NAME: &str = "sync_stack_ingest_stream";
pub const DEFAULT_IDENTIFIER_ATTRIBUTE: &str = "Id";
pub const DEFAULT_EVENT_ATTRIBUTE: &str = "dynamo_event";

const ENV_STREAM_NAME: &str = "INGEST_STREAM_NAME";
const ENV_IDENTIFIER_ATTRIBUTE: &str = "IDENTIFIER_ATTRIBUTE";
const ENV_EVENT_ATTRIBUTE: &str = "EVENT_ATTRIBUTE";
const ENV_EXTRACTION_POLICY: &str = "EXTRACTION_POLICY";
const ENV_REMOVE_POLICY: &str = "REMOVE_POLICY";

/// Settings of the transform function. They are fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    stream_name: String,
    identifier_attribute: String,
    event_attribute: String,
    extraction_policy: ExtractionPolicy,
    remove_policy: RemovePolicy,
}

impl Config {
    /// Create [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Read the configuration from the process environment, falling back to defaults for
    /// every unset variable.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the value for an
    /// environment variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(name) = lookup(ENV_STREAM_NAME) {
            builder = builder.stream_name(name);
        }
        if let Some(name) = lookup(ENV_IDENTIFIER_ATTRIBUTE) {
            builder = builder.identifier_attribute(name);
        }
        if let Some(name) = lookup(ENV_EVENT_ATTRIBUTE) {
            builder = builder.event_attribute(name);
        }
        if let Some(policy) = lookup(ENV_EXTRACTION_POLICY) {
            builder = builder.extraction_policy(policy.parse()?);
        }
        if let Some(policy) = lookup(ENV_REMOVE_POLICY) {
            builder = builder.remove_policy(policy.parse()?);
        }

        builder.build()
    }

    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn identifier_attribute(&self) -> &str {
        self.identifier_attribute.as_str()
    }

    pub fn event_attribute(&self) -> &str {
        self.event_attribute.as_str()
    }

    pub fn extraction_policy(&self) -> ExtractionPolicy {
        self.extraction_policy
    }

    pub fn remove_policy(&self) -> RemovePolicy {
        self.remove_policy
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            identifier_attribute: DEFAULT_IDENTIFIER_ATTRIBUTE.to_string(),
            event_attribute: DEFAULT_EVENT_ATTRIBUTE.to_string(),
            extraction_policy: ExtractionPolicy::default(),
            remove_policy: RemovePolicy::default(),
        }
    }
}

/// A builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new `ConfigBuilder` holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the name of the stream records are published to.
    ///
    /// Setting any stream name is optional. If you omit calling this method,
    /// `sync_stack_ingest_stream` is used as default value.
    pub fn stream_name(self, stream_name: impl Into<String>) -> Self {
        Self {
            config: Config {
                stream_name: stream_name.into(),
                ..self.config
            },
        }
    }

    /// Set the attribute identifying a row. Its value is the partition key of every record.
    ///
    /// Setting any identifier attribute is optional. If you omit calling this method,
    /// `Id` is used as default value.
    pub fn identifier_attribute(self, identifier_attribute: impl Into<String>) -> Self {
        Self {
            config: Config {
                identifier_attribute: identifier_attribute.into(),
                ..self.config
            },
        }
    }

    /// Set the attribute carrying the event kind in every record.
    ///
    /// Setting any event attribute is optional. If you omit calling this method,
    /// `dynamo_event` is used as default value.
    pub fn event_attribute(self, event_attribute: impl Into<String>) -> Self {
        Self {
            config: Config {
                event_attribute: event_attribute.into(),
                ..self.config
            },
        }
    }

    pub fn extraction_policy(self, extraction_policy: ExtractionPolicy) -> Self {
        Self {
            config: Config {
                extraction_policy,
                ..self.config
            },
        }
    }

    pub fn remove_policy(self, remove_policy: RemovePolicy) -> Self {
        Self {
            config: Config {
                remove_policy,
                ..self.config
            },
        }
    }

    /// Consumes the builder and constructs a [`Config`].
    ///
    /// This method fails if any of the names is empty, or if the identifier and event
    /// attributes share a name.
    pub fn build(self) -> Result<Config, Error> {
        let config = self.config;

        for (key, value) in [
            ("stream name", &config.stream_name),
            ("identifier attribute", &config.identifier_attribute),
            ("event attribute", &config.event_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{key} must not be empty")));
            }
        }

        if config.identifier_attribute == config.event_attribute {
            return Err(Error::InvalidConfig(format!(
                "identifier and event attributes are both `{}`",
                config.event_attribute
            )));
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
