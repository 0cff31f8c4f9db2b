//! Payloads for `POST /rerank`

use super::Usage;
use serde::{Deserialize, Serialize};

/// Request body for the rerank endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<String>,
    pub model: String,

    /// Number of most relevant documents to return. All when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Echo the documents back in the results. Server default is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_documents: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<bool>,
}

/// Optional fields for [`crate::VoyageClient::rerank`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RerankOptions {
    pub top_k: Option<u32>,
    pub return_documents: Option<bool>,
    pub truncation: Option<bool>,
}

impl RerankOptions {
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn return_documents(mut self, return_documents: bool) -> Self {
        self.return_documents = Some(return_documents);
        self
    }

    pub fn truncation(mut self, truncation: bool) -> Self {
        self.truncation = Some(truncation);
        self
    }
}

impl RerankRequest {
    pub fn new(query: impl Into<String>, documents: Vec<String>, model: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            documents,
            model: model.into(),
            top_k: None,
            return_documents: None,
            truncation: None,
        }
    }

    pub fn with_options(mut self, opts: RerankOptions) -> Self {
        self.top_k = opts.top_k;
        self.return_documents = opts.return_documents;
        self.truncation = opts.truncation;
        self
    }
}

/// One reranked document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankObject {
    /// Position of the document in the request
    pub index: usize,
    pub relevance_score: f32,
    /// Only present when `return_documents` was true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Response of the rerank endpoint, sorted by descending relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankResponse {
    pub object: String,
    pub data: Vec<RerankObject>,
    pub model: String,
    pub usage: Usage,
}
