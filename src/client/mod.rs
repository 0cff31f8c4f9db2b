//! Client for the Voyage AI embedding and reranking endpoints

mod classify;
mod executor;
mod retry;
mod transport;

use crate::config::ClientConfig;
use crate::error::{Result, VoyageError};
use crate::models::{
    EmbeddingOptions, EmbeddingRequest, EmbeddingResponse, MultimodalContent, MultimodalOptions,
    MultimodalRequest, RerankOptions, RerankRequest, RerankResponse,
};
use reqwest::Client;
use retry::RetryPolicy;
use secrecy::Secret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use transport::HttpTransport;

/// Client for the Voyage AI API
///
/// Holds no per-call state, so one instance can serve concurrent calls.
pub struct VoyageClient {
    transport: HttpTransport,
    base_url: String,
    retry: RetryPolicy,
}

impl VoyageClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut client_builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        let http_client = client_builder
            .build()
            .map_err(|e| VoyageError::Config(format!("failed to build HTTP client: {}", e)))?;

        Self::with_http_client(config, http_client)
    }

    /// Create a client from `VOYAGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create client with custom HTTP client
    ///
    /// The configured timeout is not applied; set it on `http_client`.
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> Result<Self> {
        config.validate()?;

        let api_key = config.resolve_api_key().unwrap_or_else(|| {
            warn!("No Voyage API key configured and VOYAGE_API_KEY is unset");
            Secret::new(String::new())
        });

        let transport = HttpTransport::new(http_client, &api_key)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!(
            "Initialized Voyage client for {} with max_retries={}",
            base_url, config.max_retries
        );

        Ok(Self {
            transport,
            base_url,
            retry: RetryPolicy::from_config(&config),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("Sending request to {}", url);

        self.retry
            .run(|| executor::execute(&self.transport, &url, request))
            .await
    }

    /// Embed a list of texts
    ///
    /// Recommended models: voyage-3-large, voyage-3.5, voyage-3.5-lite,
    /// voyage-code-3, voyage-finance-2, voyage-law-2.
    pub async fn embed(
        &self,
        texts: Vec<String>,
        model: &str,
        opts: Option<EmbeddingOptions>,
    ) -> Result<EmbeddingResponse> {
        let request = EmbeddingRequest::new(texts, model).with_options(opts.unwrap_or_default());
        self.embed_request(&request).await
    }

    /// Send a fully built embeddings request
    pub async fn embed_request(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        self.post("embeddings", request).await
    }

    /// Embed interleaved text and images
    ///
    /// See <https://docs.voyageai.com/docs/multimodal-embeddings> for input constraints.
    pub async fn multimodal_embed(
        &self,
        inputs: Vec<MultimodalContent>,
        model: &str,
        opts: Option<MultimodalOptions>,
    ) -> Result<EmbeddingResponse> {
        let request = MultimodalRequest::new(inputs, model).with_options(opts.unwrap_or_default());
        self.multimodal_embed_request(&request).await
    }

    pub async fn multimodal_embed_request(
        &self,
        request: &MultimodalRequest,
    ) -> Result<EmbeddingResponse> {
        self.post("multimodalembeddings", request).await
    }

    /// Rerank `documents` by relevance to `query`
    ///
    /// Results are sorted by descending relevance score. Recommended models:
    /// rerank-2, rerank-2-lite.
    pub async fn rerank(
        &self,
        query: &str,
        documents: Vec<String>,
        model: &str,
        opts: Option<RerankOptions>,
    ) -> Result<RerankResponse> {
        let request =
            RerankRequest::new(query, documents, model).with_options(opts.unwrap_or_default());
        self.rerank_request(&request).await
    }

    pub async fn rerank_request(&self, request: &RerankRequest) -> Result<RerankResponse> {
        self.post("rerank", request).await
    }
}
