//! Client side of the document question-answering server.
//!
//! Exposes the wire models for `/status` and `/ask`, the [`QaApi`] seam the
//! UI controller is written against, and [`QaHttpClient`], its reqwest
//! implementation.
//!
//! # Example
//! ```no_run
//! use qa_client::{QaApi, QaClientConfig, QaHttpClient, Question};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = QaClientConfig::from_env()?;
//! let client = QaHttpClient::new(&cfg)?;
//!
//! if client.status().await?.is_ready() {
//!     let q = Question::parse("What does chapter 2 cover?").expect("non-empty");
//!     let answer = client.ask(&q).await?;
//!     println!("{}", answer.source_based_summary);
//! }
//! # Ok(()) }
//! ```

pub mod api;
pub mod config;
pub mod error_handler;
pub mod http_client;
pub mod models;
pub mod telemetry;

pub use api::QaApi;
pub use config::client_config::QaClientConfig;
pub use error_handler::{ApiError, ConfigError, QaClientError};
pub use http_client::QaHttpClient;
pub use models::{AnswerResult, Metrics, PageRef, Question, Source, StatusReport};
