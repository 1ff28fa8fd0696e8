//! # quantX Core
//!
//! Core library for the quantX quantum-inspired search engine.
//!
//! This crate provides the fundamental data structures and transforms:
//!
//! - [`Vector`] - Dense vector representation with cosine similarity
//! - [`DocumentTable`] - Tabular dataset with named columns
//! - [`TfIdfVectorizer`] - Term-frequency vectorization (capped vocabulary)
//! - [`StandardScaler`] - Per-feature standardization
//! - [`Pca`] - Seeded principal-component projection
//! - [`quantum_encode`] - The fixed tanh/sine feature map
//!
//! ## Example
//!
//! ```rust
//! use quantx_core::{Pca, StandardScaler, TfIdfVectorizer, quantum_encode};
//!
//! let corpus = vec![
//!     "rural school funding".to_string(),
//!     "teacher certification policy".to_string(),
//!     "curriculum reform for schools".to_string(),
//! ];
//!
//! let mut vectorizer = TfIdfVectorizer::new(500);
//! vectorizer.fit(&corpus).unwrap();
//! let matrix = vectorizer.transform_all(&corpus).unwrap();
//!
//! let mut scaler = StandardScaler::new();
//! scaler.fit(&matrix).unwrap();
//! let scaled = scaler.transform_all(&matrix).unwrap();
//!
//! let mut pca = Pca::new(2, 42);
//! pca.fit(&scaled).unwrap();
//! let projected = pca.transform(&scaled[0]).unwrap();
//!
//! let embedding = quantum_encode(&projected);
//! assert_eq!(embedding.len(), 4);
//! ```

pub mod encoding;
pub mod error;
pub mod pca;
pub mod scaler;
pub mod table;
pub mod tfidf;
pub mod vector;

pub use encoding::{encoded_dim, quantum_encode};
pub use error::{Error, Result};
pub use pca::Pca;
pub use scaler::StandardScaler;
pub use table::DocumentTable;
pub use tfidf::TfIdfVectorizer;
pub use vector::{cosine_similarity, Vector};

/// Vocabulary cap for the TF-IDF stage
pub const MAX_FEATURES: usize = 500;

/// Number of principal components in the projection stage
pub const N_COMPONENTS: usize = 8;

/// Seed for the PCA fit, fixed for reproducible training
pub const PCA_SEED: u64 = 42;

/// Number of rows returned by a query
pub const TOP_K: usize = 6;
