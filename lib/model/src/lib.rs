//! # quantX Model
//!
//! Model layer for the quantX quantum-inspired search engine.
//!
//! This crate ties the core transforms into the two halves of the system:
//!
//! - [`train`] - the offline trainer: fit the pipeline over a
//!   [`DocumentTable`](quantx_core::DocumentTable) and produce a
//!   [`ModelBundle`]
//! - [`search`] - the online scorer: embed a query through the frozen
//!   stages and rank every document by cosine similarity
//! - [`ModelBundle`] - the single serialized artifact linking the two,
//!   written atomically and loaded once at startup

pub mod bundle;
pub mod pipeline;
pub mod scorer;
pub mod trainer;

pub use bundle::ModelBundle;
pub use pipeline::EmbeddingPipeline;
pub use scorer::{search, SearchOutput};
pub use trainer::train;
