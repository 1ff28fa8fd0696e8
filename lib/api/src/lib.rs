//! # quantX API
//!
//! Thin REST layer for the quantX quantum-inspired search engine.
//!
//! Exposes the query interface over HTTP as JSON. All the algorithmic work
//! lives in `quantx-model`; this crate is framework glue only.

pub mod rest;

pub use rest::RestApi;
