//! Payloads for `POST /embeddings`

use super::Usage;
use crate::error::{Result, VoyageError};
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Whether the input is a search query or a document to be retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Query,
    Document,
}

/// Data type of the returned embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDType {
    Float,
    Int8,
    Uint8,
    Binary,
    Ubinary,
}

/// Wire encoding of the returned embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    Base64,
}

/// Request body for the embeddings endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Texts to embed
    pub input: Vec<String>,

    /// Model name, see [`crate::models::model`]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,

    /// Truncate inputs that exceed the context length. Server default is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dimension: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dtype: Option<OutputDType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<EncodingFormat>,
}

/// Optional fields for [`crate::VoyageClient::embed`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingOptions {
    pub input_type: Option<InputType>,
    pub truncation: Option<bool>,
    pub output_dimension: Option<u32>,
    pub output_dtype: Option<OutputDType>,
    pub encoding_format: Option<EncodingFormat>,
}

impl EmbeddingOptions {
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn truncation(mut self, truncation: bool) -> Self {
        self.truncation = Some(truncation);
        self
    }

    pub fn output_dimension(mut self, dimension: u32) -> Self {
        self.output_dimension = Some(dimension);
        self
    }

    pub fn output_dtype(mut self, dtype: OutputDType) -> Self {
        self.output_dtype = Some(dtype);
        self
    }

    pub fn encoding_format(mut self, format: EncodingFormat) -> Self {
        self.encoding_format = Some(format);
        self
    }
}

impl EmbeddingRequest {
    pub fn new(input: Vec<String>, model: impl Into<String>) -> Self {
        Self {
            input,
            model: model.into(),
            input_type: None,
            truncation: None,
            output_dimension: None,
            output_dtype: None,
            encoding_format: None,
        }
    }

    /// Copy every option into the request, leaving unset options absent
    pub fn with_options(mut self, opts: EmbeddingOptions) -> Self {
        self.input_type = opts.input_type;
        self.truncation = opts.truncation;
        self.output_dimension = opts.output_dimension;
        self.output_dtype = opts.output_dtype;
        self.encoding_format = opts.encoding_format;
        self
    }
}

/// One embedding vector as returned by the API
///
/// Numbers by default; a base64 string of little-endian values when the
/// request asked for `encoding_format = "base64"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Embedding {
    Float(Vec<f32>),
    Base64(String),
}

impl Embedding {
    /// Values as f32, decoding the base64 form as packed little-endian f32
    pub fn to_f32(&self) -> Result<Vec<f32>> {
        match self {
            Embedding::Float(values) => Ok(values.clone()),
            Embedding::Base64(encoded) => {
                let raw = base64::engine::general_purpose::STANDARD
                    .decode(encoded)
                    .map_err(|e| VoyageError::InvalidEmbedding(format!("invalid base64 embedding: {}", e)))?;

                if raw.len() % 4 != 0 {
                    return Err(VoyageError::InvalidEmbedding(format!(
                        "base64 embedding has {} bytes, not a multiple of 4",
                        raw.len()
                    )));
                }

                Ok(raw
                    .chunks_exact(4)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect())
            }
        }
    }

    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            Embedding::Float(values) => Some(values),
            Embedding::Base64(_) => None,
        }
    }
}

/// An entry of the `data` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingObject {
    /// Always "embedding"
    pub object: String,
    pub embedding: Embedding,
    /// Position of the input this embedding belongs to
    pub index: usize,
}

/// Response of the embeddings and multimodal embeddings endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Always "list"
    pub object: String,
    pub data: Vec<EmbeddingObject>,
    pub model: String,
    pub usage: Usage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_are_absent() {
        let req = EmbeddingRequest::new(vec!["a".into()], "voyage-3");
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value, json!({"input": ["a"], "model": "voyage-3"}));
    }

    #[test]
    fn test_falsy_options_are_present() {
        let req = EmbeddingRequest::new(vec!["a".into()], "voyage-3")
            .with_options(EmbeddingOptions::default().truncation(false).output_dimension(0));
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["truncation"], json!(false));
        assert_eq!(value["output_dimension"], json!(0));
        assert!(value.get("input_type").is_none());
    }

    #[test]
    fn test_presence_survives_round_trip() {
        let req = EmbeddingRequest::new(vec!["a".into()], "voyage-3")
            .with_options(
                EmbeddingOptions::default()
                    .truncation(false)
                    .input_type(InputType::Query)
                    .output_dtype(OutputDType::Int8)
                    .encoding_format(EncodingFormat::Base64),
            );
        let text = serde_json::to_string(&req).unwrap();
        let back: EmbeddingRequest = serde_json::from_str(&text).unwrap();

        assert_eq!(back, req);
        assert_eq!(back.truncation, Some(false));
        assert_eq!(back.output_dimension, None);
        assert!(text.contains(r#""input_type":"query""#));
        assert!(text.contains(r#""output_dtype":"int8""#));
    }

    #[test]
    fn test_base64_embedding_decodes() {
        let floats = [0.5f32, -1.25, 3.0];
        let bytes: Vec<u8> = floats.iter().flat_map(|f| f.to_le_bytes()).collect();
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);

        let obj: EmbeddingObject = serde_json::from_value(json!({
            "object": "embedding",
            "embedding": encoded,
            "index": 0
        }))
        .unwrap();

        assert!(obj.embedding.as_floats().is_none());
        assert_eq!(obj.embedding.to_f32().unwrap(), floats.to_vec());
    }

    #[test]
    fn test_float_embedding_parses() {
        let obj: EmbeddingObject = serde_json::from_value(json!({
            "object": "embedding",
            "embedding": [0.1, 0.2],
            "index": 1
        }))
        .unwrap();

        assert_eq!(obj.embedding.as_floats(), Some(&[0.1f32, 0.2][..]));
    }
}
