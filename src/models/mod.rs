//! Request and response payloads for the Voyage AI endpoints

pub mod embedding;
pub mod multimodal;
pub mod rerank;

pub use embedding::{
    Embedding, EmbeddingObject, EmbeddingOptions, EmbeddingRequest, EmbeddingResponse,
    EncodingFormat, InputType, OutputDType,
};
pub use multimodal::{MultimodalContent, MultimodalInput, MultimodalOptions, MultimodalRequest, OutputEncoding};
pub use rerank::{RerankObject, RerankOptions, RerankRequest, RerankResponse};

use serde::{Deserialize, Serialize};

/// Model names accepted by the API
pub mod model {
    pub const VOYAGE_3_LARGE: &str = "voyage-3-large";
    pub const VOYAGE_3: &str = "voyage-3";
    pub const VOYAGE_3_LITE: &str = "voyage-3-lite";
    pub const VOYAGE_3_5: &str = "voyage-3.5";
    pub const VOYAGE_3_5_LITE: &str = "voyage-3.5-lite";
    pub const VOYAGE_MULTIMODAL_3: &str = "voyage-multimodal-3";
    pub const VOYAGE_CODE_3: &str = "voyage-code-3";
    pub const VOYAGE_FINANCE_2: &str = "voyage-finance-2";
    pub const VOYAGE_LAW_2: &str = "voyage-law-2";
    pub const RERANK_2: &str = "rerank-2";
    pub const RERANK_2_LITE: &str = "rerank-2-lite";
}

/// Supported `output_dimension` values
pub mod dimension {
    pub const D256: u32 = 256;
    pub const D512: u32 = 512;
    pub const D1024: u32 = 1024;
    pub const D1536: u32 = 1536;
    pub const D2048: u32 = 2048;
}

/// Usage accounting returned by every endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Total tokens used for the request
    pub total_tokens: u64,

    /// Image pixels in the inputs (multimodal only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pixels: Option<u64>,

    /// Text tokens in the inputs (multimodal only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_tokens: Option<u64>,
}
