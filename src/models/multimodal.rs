//! Payloads for `POST /multimodalembeddings`

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::InputType;

/// One piece of a multimodal input
///
/// Serialized with a `type` discriminator followed by the matching field,
/// e.g. `{"type": "image_url", "image_url": "https://..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MultimodalInput {
    Text { text: String },
    /// URL of a PNG, JPEG, WEBP or GIF image
    ImageUrl { image_url: String },
    /// Image inlined as `data:<mediatype>;base64,<data>`
    ImageBase64 { image_base64: String },
}

impl MultimodalInput {
    pub fn text(text: impl Into<String>) -> Self {
        MultimodalInput::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        MultimodalInput::ImageUrl { image_url: url.into() }
    }

    /// Wrap an already encoded data URL
    pub fn image_base64(data_url: impl Into<String>) -> Self {
        MultimodalInput::ImageBase64 { image_base64: data_url.into() }
    }

    /// Decode raw image bytes and inline them as a data URL
    pub fn image_from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::image_base64(crate::data_url::from_bytes(bytes)?))
    }

    /// Read an image file and inline it as a data URL
    pub fn image_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::image_base64(crate::data_url::from_path(path)?))
    }
}

/// A single item to embed, made of text and image pieces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultimodalContent {
    pub content: Vec<MultimodalInput>,
}

impl MultimodalContent {
    pub fn new(content: Vec<MultimodalInput>) -> Self {
        Self { content }
    }
}

impl From<Vec<MultimodalInput>> for MultimodalContent {
    fn from(content: Vec<MultimodalInput>) -> Self {
        Self { content }
    }
}

/// Encoding of the returned embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    Base64,
}

/// Request body for the multimodal embeddings endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultimodalRequest {
    pub inputs: Vec<MultimodalContent>,
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_encoding: Option<OutputEncoding>,
}

/// Optional fields for [`crate::VoyageClient::multimodal_embed`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultimodalOptions {
    pub input_type: Option<InputType>,
    pub truncation: Option<bool>,
    pub output_encoding: Option<OutputEncoding>,
}

impl MultimodalOptions {
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn truncation(mut self, truncation: bool) -> Self {
        self.truncation = Some(truncation);
        self
    }

    pub fn output_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.output_encoding = Some(encoding);
        self
    }
}

impl MultimodalRequest {
    pub fn new(inputs: Vec<MultimodalContent>, model: impl Into<String>) -> Self {
        Self {
            inputs,
            model: model.into(),
            input_type: None,
            truncation: None,
            output_encoding: None,
        }
    }

    pub fn with_options(mut self, opts: MultimodalOptions) -> Self {
        self.input_type = opts.input_type;
        self.truncation = opts.truncation;
        self.output_encoding = opts.output_encoding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_inline_image_round_trip() {
        let item = MultimodalInput::image_base64(DATA_URL);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value, json!({"type": "image_base64", "image_base64": DATA_URL}));

        let back: MultimodalInput = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_variants_carry_only_their_field() {
        let text = serde_json::to_value(MultimodalInput::text("a cat")).unwrap();
        assert_eq!(text, json!({"type": "text", "text": "a cat"}));

        let url = serde_json::to_value(MultimodalInput::image_url("https://x/cat.png")).unwrap();
        assert_eq!(url, json!({"type": "image_url", "image_url": "https://x/cat.png"}));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let parsed = serde_json::from_value::<MultimodalInput>(json!({"type": "video", "video": "x"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_request_shape() {
        let req = MultimodalRequest::new(
            vec![vec![MultimodalInput::text("caption"), MultimodalInput::image_base64(DATA_URL)].into()],
            "voyage-multimodal-3",
        )
        .with_options(MultimodalOptions::default().truncation(false));

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["inputs"][0]["content"][1]["type"], "image_base64");
        assert_eq!(value["truncation"], json!(false));
        assert!(value.get("output_encoding").is_none());
        assert!(value.get("input_type").is_none());
    }
}
