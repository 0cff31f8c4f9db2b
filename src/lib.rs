//! voyageai - typed async client for the Voyage AI embedding and reranking API
//!
//! This library wraps the `/embeddings`, `/multimodalembeddings` and
//! `/rerank` endpoints with typed requests and responses, bearer
//! authentication, and a retry loop that tells transient failures from
//! permanent ones.
//!
//! ## Features
//!
//! - **Typed payloads**: optional request fields are omitted when unset, so
//!   `false` and `0` are sent as given
//! - **Retries**: 429 and 5xx responses are retried with exponential backoff;
//!   400, 401 and 422 fail immediately
//! - **Multimodal inputs**: text, image URLs and inline base64 images, with
//!   helpers that turn image files into data URLs
//! - **Configuration**: builder setters, environment variables or a config file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voyageai::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = VoyageClient::new(
//!         ClientConfig::new()
//!             .with_api_key("pa-...")
//!             .with_max_retries(3),
//!     )?;
//!
//!     let response = client
//!         .embed(vec!["Embed this text please".to_string()], model::VOYAGE_3_LITE, None)
//!         .await?;
//!
//!     println!("{} embeddings, {} tokens", response.data.len(), response.usage.total_tokens);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod data_url;
pub mod error;
pub mod models;
pub mod observability;

pub use client::VoyageClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result, VoyageError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::VoyageClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{Result, VoyageError};
    pub use crate::models::{
        model, Embedding, EmbeddingOptions, EmbeddingResponse, InputType, MultimodalContent,
        MultimodalInput, MultimodalOptions, RerankOptions, RerankResponse,
    };
}
