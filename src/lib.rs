//! # quantX
//!
//! Quantum-inspired semantic search over small tabular datasets.
//!
//! quantX embeds documents with a fixed pipeline - TF-IDF vectorization,
//! standardization, an 8-component PCA projection and a tanh/sine feature
//! map - then ranks them against free-text queries by cosine similarity.
//! "Quantum" names the nonlinear feature map only; there is no quantum
//! computation involved.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! quantx train --dataset policies.json --model quantum_model.bin
//! quantx query --model quantum_model.bin "school funding"
//! quantx serve --model quantum_model.bin --port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use quantx::prelude::*;
//! use serde_json::json;
//!
//! let records: Vec<serde_json::Value> = (0..10)
//!     .map(|i| json!({
//!         "title": format!("Policy {i}"),
//!         "summary": format!(
//!             "policy about {} in the {} district",
//!             ["funding", "training", "curriculum"][i % 3],
//!             ["north", "south", "east", "west", "harbor"][i % 5],
//!         ),
//!     }))
//!     .collect();
//!
//! let table = DocumentTable::from_records(&records).unwrap();
//! let bundle = train(table).unwrap();
//! let output = search(&bundle, "school funding").unwrap();
//! assert!(output.results.len() <= 6);
//! ```
//!
//! ## Crate Structure
//!
//! quantX is composed of several crates:
//!
//! - `quantx-core` - transforms (TF-IDF, scaler, PCA, feature map) and the
//!   document table
//! - `quantx-model` - the fitted pipeline, trainer, scorer and bundle
//!   persistence
//! - `quantx-api` - JSON REST endpoint over a loaded bundle

// Re-export core types
pub use quantx_core::{
    cosine_similarity, encoded_dim, quantum_encode, DocumentTable, Error, Pca, Result,
    StandardScaler, TfIdfVectorizer, Vector, MAX_FEATURES, N_COMPONENTS, PCA_SEED, TOP_K,
};

// Re-export the model layer
pub use quantx_model::{search, train, EmbeddingPipeline, ModelBundle, SearchOutput};

// Re-export the API
pub use quantx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        cosine_similarity, search, train, DocumentTable, EmbeddingPipeline, Error, ModelBundle,
        Result, SearchOutput, Vector, RestApi,
    };
}
