use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use quantx_model::{search, ModelBundle, SearchOutput};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
struct SearchRequest {
    query: String,
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    #[serde(flatten)]
    output: SearchOutput,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    documents: usize,
    embedding_dim: usize,
}

pub struct RestApi;

impl RestApi {
    /// Start the HTTP server over a loaded, read-only bundle
    ///
    /// The bundle is shared immutable state; every handler reads it and
    /// nothing writes it, so no locking is involved.
    pub async fn start(bundle: Arc<ModelBundle>, port: u16) -> std::io::Result<()> {
        info!(port, documents = bundle.len(), "starting REST API");

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(bundle.clone()))
                .route("/search", web::post().to(search_handler))
                .route("/healthz", web::get().to(health_handler))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn search_handler(
    bundle: web::Data<Arc<ModelBundle>>,
    request: web::Json<SearchRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    match search(&bundle, &request.query) {
        Ok(output) => Ok(HttpResponse::Ok().json(SearchResponse {
            query: request.query,
            output,
        })),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn health_handler(bundle: web::Data<Arc<ModelBundle>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        documents: bundle.len(),
        embedding_dim: bundle.pipeline.embedding_dim(),
    }))
}
