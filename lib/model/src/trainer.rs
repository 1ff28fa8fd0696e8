use crate::bundle::ModelBundle;
use crate::pipeline::EmbeddingPipeline;
use quantx_core::{DocumentTable, Error, Result};
use tracing::info;

/// Train a model bundle from a document table
///
/// Selects one representative text per row, fits the embedding pipeline
/// over the corpus and packages the frozen stages, the embedding matrix
/// and the table (augmented with the derived `text` column) into a bundle.
/// Every input row gets exactly one embedding, in row order.
pub fn train(mut table: DocumentTable) -> Result<ModelBundle> {
    if table.is_empty() {
        return Err(Error::EmptyDataset);
    }
    info!(rows = table.len(), "dataset loaded");

    // The derived text always wins; a preexisting `text` column is replaced
    // so the stored table matches what the embeddings were fit on.
    let texts: Vec<String> = (0..table.len()).map(|i| table.text_for_row(i)).collect();
    table.set_column("text", texts.iter().cloned().map(Some).collect())?;

    info!("fitting embedding pipeline");
    let (pipeline, embeddings) = EmbeddingPipeline::fit(&texts)?;
    info!(
        documents = embeddings.len(),
        dim = pipeline.embedding_dim(),
        "embeddings generated"
    );

    Ok(ModelBundle {
        pipeline,
        embeddings,
        table,
    })
}
