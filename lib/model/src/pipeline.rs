use quantx_core::{
    quantum_encode, Pca, Result, StandardScaler, TfIdfVectorizer, Vector, MAX_FEATURES,
    N_COMPONENTS, PCA_SEED,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fitted embedding pipeline: vectorize, scale, project, encode
///
/// The three fitted stages are frozen after [`EmbeddingPipeline::fit`] and
/// the query path applies them in the exact same order as training. Any
/// divergence between the two paths would silently produce meaningless
/// similarity scores, so both go through [`EmbeddingPipeline::embed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingPipeline {
    vectorizer: TfIdfVectorizer,
    scaler: StandardScaler,
    pca: Pca,
}

impl EmbeddingPipeline {
    /// Fit the full pipeline over a corpus and return the pipeline together
    /// with one embedding per input text, in input order
    pub fn fit(texts: &[String]) -> Result<(Self, Vec<Vector>)> {
        let mut vectorizer = TfIdfVectorizer::new(MAX_FEATURES);
        vectorizer.fit(texts)?;
        let tfidf = vectorizer.transform_all(texts)?;
        debug!(
            vocabulary = vectorizer.vocabulary_len(),
            "TF-IDF stage fitted"
        );

        let mut scaler = StandardScaler::new();
        scaler.fit(&tfidf)?;
        let scaled = scaler.transform_all(&tfidf)?;

        let mut pca = Pca::new(N_COMPONENTS, PCA_SEED);
        pca.fit(&scaled)?;
        let projected = pca.transform_all(&scaled)?;
        debug!(components = N_COMPONENTS, "projection stage fitted");

        let embeddings = projected
            .iter()
            .map(|p| Vector::new(quantum_encode(p)))
            .collect();

        let pipeline = Self {
            vectorizer,
            scaler,
            pca,
        };
        Ok((pipeline, embeddings))
    }

    /// Embed a single text through the frozen stages
    pub fn embed(&self, text: &str) -> Result<Vector> {
        let tfidf = self.vectorizer.transform(text)?;
        let scaled = self.scaler.transform(&tfidf)?;
        let projected = self.pca.transform(&scaled)?;
        Ok(Vector::new(quantum_encode(&projected)))
    }

    /// Dimensionality of the embeddings this pipeline produces
    #[inline]
    #[must_use]
    pub fn embedding_dim(&self) -> usize {
        quantx_core::encoded_dim(self.pca.n_components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        (0..12)
            .map(|i| {
                format!(
                    "policy number {i} about {} in the {} district",
                    ["funding", "training", "curriculum", "safety"][i % 4],
                    ["north", "south", "east"][i % 3]
                )
            })
            .collect()
    }

    #[test]
    fn test_fit_produces_one_embedding_per_text() {
        let texts = corpus();
        let (pipeline, embeddings) = EmbeddingPipeline::fit(&texts).unwrap();
        assert_eq!(embeddings.len(), texts.len());
        for e in &embeddings {
            assert_eq!(e.dim(), pipeline.embedding_dim());
            assert_eq!(e.dim(), 16);
        }
    }

    #[test]
    fn test_query_path_matches_training_path() {
        let texts = corpus();
        let (pipeline, embeddings) = EmbeddingPipeline::fit(&texts).unwrap();
        // Re-embedding a training text through the query path reproduces
        // the stored embedding exactly
        let again = pipeline.embed(&texts[3]).unwrap();
        assert_eq!(again, embeddings[3]);
    }

    #[test]
    fn test_fit_deterministic() {
        let texts = corpus();
        let (_, a) = EmbeddingPipeline::fit(&texts).unwrap();
        let (_, b) = EmbeddingPipeline::fit(&texts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_unseen_terms() {
        let (pipeline, _) = EmbeddingPipeline::fit(&corpus()).unwrap();
        let e = pipeline.embed("entirely novel vocabulary zyzzyva").unwrap();
        assert_eq!(e.dim(), 16);
    }

    #[test]
    fn test_embed_empty_query() {
        let (pipeline, _) = EmbeddingPipeline::fit(&corpus()).unwrap();
        let e = pipeline.embed("").unwrap();
        assert_eq!(e.dim(), 16);
    }

    #[test]
    fn test_fit_small_corpus_errors() {
        // 4 samples cannot support an 8-component projection
        let texts: Vec<String> = (0..4).map(|i| format!("short text {i}")).collect();
        assert!(EmbeddingPipeline::fit(&texts).is_err());
    }
}
