//! Basic usage example: text embeddings, a multimodal embedding and a rerank
//!
//! Run with `VOYAGE_API_KEY=... cargo run --example basic_usage -- path/to/image.png`

use voyageai::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    voyageai::observability::init_tracing("info", "pretty");

    println!("=== Voyage AI Basic Usage Example ===\n");

    let client = VoyageClient::new(ClientConfig::from_env()?.with_max_retries(3))?;

    // 1. Text embeddings
    let embeddings = client
        .embed(
            vec![
                "Embed this text please".to_string(),
                "And this as well".to_string(),
            ],
            model::VOYAGE_3_LITE,
            None,
        )
        .await?;

    match embeddings.data.first() {
        Some(item) => {
            let first = item.embedding.to_f32()?;
            println!("Embeddings (first 5): {:?}", &first[..first.len().min(5)]);
        }
        None => println!("No embeddings returned"),
    }
    println!("Usage: {:?}\n", embeddings.usage);

    // 2. Multimodal embedding, if an image path was given
    if let Some(path) = std::env::args().nth(1) {
        let inputs = vec![MultimodalContent::new(vec![
            MultimodalInput::text("This is a picture"),
            MultimodalInput::image_from_path(&path)?,
        ])];

        let multimodal = client
            .multimodal_embed(inputs, model::VOYAGE_MULTIMODAL_3, None)
            .await?;

        match multimodal.data.first() {
            Some(item) => {
                let first = item.embedding.to_f32()?;
                println!("Multimodal embeddings (first 5): {:?}", &first[..first.len().min(5)]);
            }
            None => println!("No multimodal embeddings returned"),
        }
        println!("Usage: {:?}\n", multimodal.usage);
    }

    // 3. Reranking
    let reranking = client
        .rerank(
            "This is an example query",
            vec![
                "this is a document".to_string(),
                "this is also a document".to_string(),
            ],
            model::RERANK_2_LITE,
            Some(RerankOptions::default().return_documents(true)),
        )
        .await?;

    for result in &reranking.data {
        println!(
            "  #{} score={:.4} {}",
            result.index,
            result.relevance_score,
            result.document.as_deref().unwrap_or("")
        );
    }
    println!("Usage: {:?}", reranking.usage);

    Ok(())
}
