use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Model {
    pub title: String,
    pub name: String,
    pub order: i64,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub min_order: Option<i64>,
    pub limit: Option<usize>,
}

pub type Db = Arc<BTreeMap<i64, Model>>;

/// Models every fresh app starts with, keyed by `order`.
pub fn seed() -> BTreeMap<i64, Model> {
    [("first", "apple", 1), ("test", "mango", 2), ("third", "pear", 3)]
        .into_iter()
        .map(|(title, name, order)| {
            let model = Model {
                title: title.to_string(),
                name: name.to_string(),
                order,
            };
            (order, model)
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/models", get(list_models))
        .route("/models/{order}", get(get_model))
        .route("/echo/query", get(echo_query))
        .route("/echo/headers", get(echo_headers))
        .route("/echo/body", post(echo_body).put(echo_body).patch(echo_body))
        .route("/empty", get(empty))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "fixture server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_models(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Model>> {
    let min_order = params.min_order.unwrap_or(i64::MIN);
    let limit = params.limit.unwrap_or(usize::MAX);
    Json(
        db.values()
            .filter(|m| m.order >= min_order)
            .take(limit)
            .cloned()
            .collect(),
    )
}

async fn get_model(State(db): State<Db>, Path(order): Path<i64>) -> Result<Json<Model>, StatusCode> {
    db.get(&order).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Returns the decoded query pairs as a JSON object.
async fn echo_query(Query(params): Query<BTreeMap<String, String>>) -> Json<BTreeMap<String, String>> {
    Json(params)
}

/// Returns request headers (lowercased names) as a JSON object.
async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
    )
}

/// Returns the request body unchanged.
async fn echo_body(body: Bytes) -> Bytes {
    body
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}
