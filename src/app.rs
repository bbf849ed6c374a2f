use axum::{
    Json, Router,
    extract::{Path, Query, rejection::JsonRejection},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::error::{ApiError, AppError};
use crate::eval::{self, EvalError, Operation};

/// Query parameters for the query-all shape. Everything is optional so
/// presence can be checked per field with a specific message.
#[derive(Deserialize)]
struct CalcQuery {
    op: Option<String>,
    a: Option<String>,
    b: Option<String>,
}

/// Query parameters for the path-op shape (operation comes from the path).
#[derive(Deserialize)]
struct OperandQuery {
    a: Option<String>,
    b: Option<String>,
}

#[derive(Serialize)]
struct CalcResponse {
    operation: &'static str,
    a: f64,
    b: f64,
    result: f64,
}

pub async fn run(config: Config) -> Result<(), AppError> {
    let app = router();

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| AppError::Bind(config.bind.clone(), e))?;
    info!(bind = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

/// Build the full router. Exposed separately so tests can drive it
/// in-process without a listener.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/calc", get(calc_query).post(calc_body))
        .route("/api/calc/:op", get(calc_path_op))
        .route("/api/calc/:op/:a/:b", get(calc_path_all))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("ctrl-c received, shutting down"),
        Err(e) => {
            // No signal handler; keep serving until the process is killed.
            tracing::warn!("failed to install ctrl-c handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}

/// GET / — lists the equivalent request shapes. Informational only.
async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "calc-api",
        "endpoints": [
            "GET /api/calc?op=add&a=5&b=10",
            "GET /api/calc/{op}?a=5&b=10",
            "GET /api/calc/{op}/{a}/{b}",
            "POST /api/calc",
        ],
        "sample_body": { "op": "divide", "a": 5, "b": 10 },
        "operations": ["add", "subtract", "multiply", "divide"],
    }))
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/calc?op=..&a=..&b=..
async fn calc_query(Query(params): Query<CalcQuery>) -> Result<Json<CalcResponse>, ApiError> {
    let op = require(params.op, "op")?;
    let a = require(params.a, "a")?;
    let b = require(params.b, "b")?;
    compute(&op, &a, &b)
}

/// GET /api/calc/:op?a=..&b=..
async fn calc_path_op(
    Path(op): Path<String>,
    Query(params): Query<OperandQuery>,
) -> Result<Json<CalcResponse>, ApiError> {
    let a = require(params.a, "a")?;
    let b = require(params.b, "b")?;
    compute(&op, &a, &b)
}

/// GET /api/calc/:op/:a/:b
async fn calc_path_all(
    Path((op, a, b)): Path<(String, String, String)>,
) -> Result<Json<CalcResponse>, ApiError> {
    compute(&op, &a, &b)
}

/// POST /api/calc with body {"op": .., "a": .., "b": ..}
async fn calc_body(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    let op = match body.get("op") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(ApiError::BadRequest(
                "field 'op' must be a string".to_string(),
            ));
        }
        None => return Err(missing("op")),
    };
    let a = body_operand(&body, "a")?;
    let b = body_operand(&body, "b")?;

    finish(&op, a, b)
}

fn missing(name: &str) -> ApiError {
    ApiError::BadRequest(format!("missing required parameter '{name}'"))
}

fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field.ok_or_else(|| missing(name))
}

fn parse_operand(raw: &str, name: &str) -> Result<f64, ApiError> {
    raw.parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("operand '{name}' is not a number: '{raw}'")))
}

/// Extract a body operand: JSON numbers directly, numeric strings through
/// the same parse the string-carrying shapes use.
fn body_operand(body: &Value, name: &str) -> Result<f64, ApiError> {
    match body.get(name) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ApiError::BadRequest(format!("operand '{name}' is not a number"))),
        Some(Value::String(s)) => parse_operand(s, name),
        Some(_) => Err(ApiError::BadRequest(format!(
            "operand '{name}' is not a number"
        ))),
        None => Err(missing(name)),
    }
}

/// Shared tail of the three string-carrying shapes: parse both operands,
/// then evaluate.
fn compute(op_name: &str, a_raw: &str, b_raw: &str) -> Result<Json<CalcResponse>, ApiError> {
    let a = parse_operand(a_raw, "a")?;
    let b = parse_operand(b_raw, "b")?;
    finish(op_name, a, b)
}

/// Resolve the operation name and evaluate. Every ingress shape funnels
/// through here, so the business logic exists exactly once.
fn finish(op_name: &str, a: f64, b: f64) -> Result<Json<CalcResponse>, ApiError> {
    let op = Operation::from_name(op_name)
        .ok_or_else(|| EvalError::UnknownOperation(op_name.to_string()))?;
    let result = eval::evaluate(op, a, b)?;

    Ok(Json(CalcResponse {
        operation: op.name(),
        a,
        b,
        result,
    }))
}
