use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Term-frequency / inverse-document-frequency vectorizer
///
/// Produces dense L2-normalized TF-IDF vectors over a vocabulary capped at
/// `max_features` terms. The vocabulary keeps the terms with the highest
/// total count across the corpus, ties broken lexicographically, and the
/// IDF uses the smoothed form `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    // term -> feature index
    vocabulary: HashMap<String, usize>,
    // feature index -> inverse document frequency
    idf: Vec<f32>,
    max_features: usize,
    n_documents: usize,
}

impl TfIdfVectorizer {
    #[inline]
    #[must_use]
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            max_features,
            n_documents: 0,
        }
    }

    /// Tokenize text into lowercase alphanumeric terms
    ///
    /// Splits on any non-alphanumeric character and drops single-character
    /// tokens.
    #[inline]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() > 1)
            .map(|s| s.to_string())
            .collect()
    }

    /// Fit the vocabulary and IDF weights over a corpus
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut corpus_counts: HashMap<String, u64> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = Self::tokenize(doc);
            let mut seen: HashMap<&str, u64> = HashMap::new();
            for token in &tokens {
                *seen.entry(token.as_str()).or_insert(0) += 1;
            }
            for (token, count) in seen {
                *corpus_counts.entry(token.to_string()).or_insert(0) += count;
                *document_frequency.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        // Keep the max_features most frequent terms; sort is (count desc,
        // term asc) so the cap is deterministic.
        let mut terms: Vec<(String, u64)> = corpus_counts.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(self.max_features);

        // Vocabulary indices follow lexicographic term order
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        self.n_documents = documents.len();
        self.vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (term.clone(), idx))
            .collect();

        let n = self.n_documents as f32;
        self.idf = vec![0.0; self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0) as f32;
            self.idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        Ok(())
    }

    /// Transform a single document into a dense L2-normalized TF-IDF vector
    ///
    /// Terms outside the fitted vocabulary contribute nothing.
    pub fn transform(&self, document: &str) -> Result<Vec<f32>> {
        if self.vocabulary.is_empty() {
            return Err(Error::NotFitted("TfIdfVectorizer"));
        }

        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in Self::tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        for (idx, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Ok(vector)
    }

    /// Transform a corpus into a dense matrix, one row per document
    pub fn transform_all(&self, documents: &[String]) -> Result<Vec<Vec<f32>>> {
        documents.iter().map(|d| self.transform(d)).collect()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "school funding policy for rural schools".to_string(),
            "teacher training and certification policy".to_string(),
            "school curriculum reform".to_string(),
        ]
    }

    #[test]
    fn test_tokenize() {
        let tokens = TfIdfVectorizer::tokenize("Hello, World! a b2c");
        assert_eq!(tokens, vec!["hello", "world", "b2c"]);
    }

    #[test]
    fn test_fit_vocabulary() {
        let mut v = TfIdfVectorizer::new(500);
        v.fit(&corpus()).unwrap();
        assert!(v.is_fitted());
        assert!(v.vocabulary_len() <= 500);
        assert!(v.vocabulary.contains_key("school"));
        assert!(v.vocabulary.contains_key("policy"));
    }

    #[test]
    fn test_max_features_cap() {
        let mut v = TfIdfVectorizer::new(2);
        v.fit(&corpus()).unwrap();
        assert_eq!(v.vocabulary_len(), 2);
        // "policy" (2 docs) and "school" (2 docs, plural counted separately)
        assert!(v.vocabulary.contains_key("policy"));
        assert!(v.vocabulary.contains_key("school"));
    }

    #[test]
    fn test_transform_l2_normalized() {
        let mut v = TfIdfVectorizer::new(500);
        v.fit(&corpus()).unwrap();
        let vec = v.transform("school funding policy").unwrap();
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unseen_terms_ignored() {
        let mut v = TfIdfVectorizer::new(500);
        v.fit(&corpus()).unwrap();
        let vec = v.transform("zyzzyva qwerty").unwrap();
        assert!(vec.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_idf_weights_rare_terms_higher() {
        let mut v = TfIdfVectorizer::new(500);
        v.fit(&corpus()).unwrap();
        let idx_school = v.vocabulary["school"];
        let idx_reform = v.vocabulary["reform"];
        // "reform" appears in one document, "school" in two
        assert!(v.idf[idx_reform] > v.idf[idx_school]);
    }

    #[test]
    fn test_transform_before_fit_errors() {
        let v = TfIdfVectorizer::new(500);
        assert!(v.transform("anything").is_err());
    }

    #[test]
    fn test_fit_empty_corpus_errors() {
        let mut v = TfIdfVectorizer::new(500);
        assert!(v.fit(&[]).is_err());
    }

    #[test]
    fn test_deterministic_fit() {
        let mut a = TfIdfVectorizer::new(500);
        let mut b = TfIdfVectorizer::new(500);
        a.fit(&corpus()).unwrap();
        b.fit(&corpus()).unwrap();
        assert_eq!(
            a.transform("school policy").unwrap(),
            b.transform("school policy").unwrap()
        );
    }
}
