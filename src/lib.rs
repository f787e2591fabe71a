//! Forward [Amazon DynamoDB Streams](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/streamsmain.html)
//! change notifications to an [Amazon Kinesis data stream](https://docs.aws.amazon.com/streams/latest/dev/introduction.html)
//! as flat JSON records a data warehouse can ingest.
//!
//! ## Getting Started
//!
//! The crate ships a Lambda function (`src/main.rs`) subscribed to a table's stream. Every
//! notification of the delivered batch is mapped to at most one [`OutputRecord`](types::OutputRecord)
//! which is put to the ingest stream with the row identifier as partition key, so all the
//! changes of a row keep their order downstream.
//!
//! The same processing can be driven from any async code.
//!
//! ```rust,no_run
//! use aws_config::BehaviorVersion;
//! use dynamo_sync::{handler, Client, Config};
//!
//! # async fn wrapper(event: dynamo_sync::types::DynamodbEvent) -> Result<(), dynamo_sync::error::Error> {
//! let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//! let client = Client::new(&sdk_config);
//! let config = Config::builder()
//!     .stream_name("sync_stack_ingest_stream")
//!     .build()?;
//!
//! let message = handler::handle(&client, &config, event).await?;
//! println!("{message}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Policies
//!
//! How a notification becomes a record is controlled by two settings of [`Config`]:
//!
//! - [`ExtractionPolicy`]: copy the whole image (`full-image`) or only the identifier
//!   (`identifier-only`).
//! - [`RemovePolicy`]: publish a `REMOVE`-tagged record from the old image (`tombstone`) or
//!   only log the removal (`skip`).

/// Client for calling AWS APIs.
pub mod client;

/// Runtime configuration.
pub mod config;

/// Common errors.
pub mod error;

/// Batch processing.
pub mod handler;

/// Record extraction policies.
pub mod policy;

/// Mapping from change notifications to output records.
pub mod transform;

/// Data structures used by operations.
pub mod types;

pub use client::{Client, KinesisClient};
pub use config::Config;
pub use policy::{ExtractionPolicy, RemovePolicy};
