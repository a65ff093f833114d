// Card Validator - Web Server
// REST API with Axum over the classification + Luhn core

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use card_validator::{
    classify_card, init_logging, network_rules, validate_card, AppConfig, CardNetwork,
    ValidationResult,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// Upper bound on numbers accepted by one POST /api/validate
const MAX_BATCH: usize = 1000;

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Network rule response
#[derive(Serialize)]
struct RuleResponse {
    id: &'static str,
    network: CardNetwork,
    name: &'static str,
    prefixes: Vec<String>,
    lengths: &'static [usize],
}

#[derive(Serialize)]
struct ClassifyResponse {
    network: CardNetwork,
    name: &'static str,
}

#[derive(Deserialize)]
struct ValidateRequest {
    numbers: Vec<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/networks - Rule table in matching order
async fn get_networks() -> impl IntoResponse {
    let rules: Vec<RuleResponse> = network_rules()
        .iter()
        .map(|rule| RuleResponse {
            id: rule.id,
            network: rule.network,
            name: rule.network.name(),
            prefixes: rule.prefixes.iter().map(|p| p.to_string()).collect(),
            lengths: rule.lengths,
        })
        .collect();

    Json(ApiResponse::ok(rules))
}

/// GET /api/classify/:number - Network only
async fn classify(Path(number): Path<String>) -> impl IntoResponse {
    let network = classify_card(&number);
    Json(ApiResponse::ok(ClassifyResponse {
        network,
        name: network.name(),
    }))
}

/// GET /api/validate/:number - Network + checksum (`Path` already percent-decodes)
async fn validate_one(Path(number): Path<String>) -> impl IntoResponse {
    Json(ApiResponse::ok(validate_card(&number)))
}

/// POST /api/validate - Many numbers at once
async fn validate_many(Json(request): Json<ValidateRequest>) -> impl IntoResponse {
    if request.numbers.len() > MAX_BATCH {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ApiResponse::<Vec<ValidationResult>>::err(format!(
                "at most {} numbers per request",
                MAX_BATCH
            ))),
        )
            .into_response();
    }

    let results: Vec<ValidationResult> = request.numbers.iter().map(|n| validate_card(n)).collect();
    tracing::debug!(count = results.len(), "validated batch request");

    (StatusCode::OK, Json(ApiResponse::ok(results))).into_response()
}

fn build_router() -> Router {
    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/networks", get(get_networks))
        .route("/classify/:number", get(classify))
        .route("/validate/:number", get(validate_one))
        .route("/validate", axum::routing::post(validate_many));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(None, &cwd)?;
    init_logging(&config.logging.filter);

    println!("🌐 Card Validator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let app = build_router();

    let addr = config.server.bind.as_str();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(addr, "server listening");
    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/validate/4111111111111111", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = build_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_validate_path() {
        let (status, body) = get_json("/api/validate/4111111111111111").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!({ "valid": true, "network": "Visa" }));
    }

    #[tokio::test]
    async fn test_validate_path_with_encoded_spaces() {
        let (_, body) = get_json("/api/validate/6011%200009%209013%209424").await;
        assert_eq!(body["data"]["network"], "Discover");
        assert_eq!(body["data"]["valid"], true);
    }

    #[tokio::test]
    async fn test_classify_unknown() {
        let (_, body) = get_json("/api/classify/abcd").await;
        assert_eq!(body["data"]["network"], "Unknown");
    }

    #[tokio::test]
    async fn test_networks_in_order() {
        let (_, body) = get_json("/api/networks").await;
        let rules = body["data"].as_array().unwrap();
        assert_eq!(rules.len(), 10);
        assert_eq!(rules[0]["network"], "Visa");
        assert_eq!(rules[1]["prefixes"], serde_json::json!(["51-55", "22-27"]));
    }

    #[tokio::test]
    async fn test_validate_many() {
        let body = serde_json::json!({ "numbers": ["4111111111111112", "1234567890123456"] });
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/validate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["data"],
            serde_json::json!([
                { "valid": false, "network": "Visa" },
                { "valid": false, "network": "Unknown" }
            ])
        );
    }
}
