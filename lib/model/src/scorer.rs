use crate::bundle::ModelBundle;
use quantx_core::{Error, Result, TOP_K};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Placeholder shown for missing cells in result rows
const MISSING: &str = "N/A";

/// Everything a query returns, ready for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    /// Top-ranked rows as field->value mappings, including a `score` field
    pub results: Vec<serde_json::Map<String, Value>>,
    /// Count by `region` value over the returned rows
    pub region_data: BTreeMap<String, usize>,
    /// Count by `status` value over the returned rows
    pub status_data: BTreeMap<String, usize>,
    /// Title -> similarity score for the returned rows
    pub scores_data: BTreeMap<String, f32>,
}

/// Score a free-text query against every document in the bundle
///
/// A pure function of (query, bundle): embeds the query through the frozen
/// pipeline, ranks all documents by cosine similarity and returns the top
/// `min(6, n)` rows with aggregate counts. Empty queries are not rejected;
/// they embed to a low-signal vector and still produce valid output.
pub fn search(bundle: &ModelBundle, query: &str) -> Result<SearchOutput> {
    if !bundle.table.has_column("title") {
        return Err(Error::ColumnNotFound("title".to_string()));
    }

    let query_embedding = bundle.pipeline.embed(query)?;

    let scores: Vec<f32> = bundle
        .embeddings
        .iter()
        .map(|doc| query_embedding.cosine_similarity(doc))
        .collect();

    // Stable sort keeps table order among ties
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(TOP_K);

    debug!(
        candidates = scores.len(),
        returned = order.len(),
        "query ranked"
    );

    let mut results = Vec::with_capacity(order.len());
    for &row in &order {
        let mut record = bundle.table.row_as_record(row, MISSING);
        record.insert("score".to_string(), serde_json::json!(scores[row]));
        results.push(record);
    }

    let region_data = count_by_column(bundle, &order, "region", "Unknown");
    let status_data = count_by_column(bundle, &order, "status", "Unspecified");

    let mut scores_data = BTreeMap::new();
    for &row in &order {
        let title = bundle.table.get(row, "title").unwrap_or(MISSING);
        scores_data.insert(title.to_string(), scores[row]);
    }

    Ok(SearchOutput {
        results,
        region_data,
        status_data,
        scores_data,
    })
}

/// Count-by-value over one column of the selected rows
///
/// When the column does not exist the whole selection lands in a single
/// `fallback` bucket; missing cells count under the display placeholder.
fn count_by_column(
    bundle: &ModelBundle,
    rows: &[usize],
    column: &str,
    fallback: &str,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    if bundle.table.has_column(column) {
        for &row in rows {
            let value = bundle.table.get(row, column).unwrap_or(MISSING);
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    } else {
        counts.insert(fallback.to_string(), rows.len());
    }
    counts
}
