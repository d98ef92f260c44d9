//! Axum route handlers for the four advisory categories.
//!
//! Every handler follows the same single-shot transaction: verify the shared
//! secret, validate presence of required fields, compose the prompt pair,
//! make one completion call, wrap the text in the category's envelope.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::auth::verify_api_key;
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct RiskAnalysisRequest {
    pub business_data: String,
    #[serde(default)]
    pub risk_areas: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct RiskAnalysisResponse {
    pub analysis: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct ComplianceCheckRequest {
    pub document: String,
    pub compliance_framework: String,
}

#[derive(Debug, Serialize)]
pub struct ComplianceCheckResponse {
    pub compliance_report: String,
    pub framework: String,
}

#[derive(Debug, Deserialize)]
pub struct DueDiligenceRequest {
    pub company_info: String,
    #[serde(default)]
    pub focus_areas: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct DueDiligenceResponse {
    pub due_diligence_report: String,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// General business-intelligence chat with the executive persona.
pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    verify_api_key(&state.config, &headers)?;
    require_field(&request.message, "message")?;

    let prompt = state.composer.chat(&request.message, request.context.as_deref());
    let response = state
        .llm
        .complete(&[
            ChatMessage::system(prompt.system),
            ChatMessage::user(prompt.user),
        ])
        .await?;

    Ok(Json(ChatResponse {
        response,
        model: state.llm.model().to_string(),
    }))
}

/// POST /risk-analysis
///
/// Fiduciary risk evaluation over free-form business data.
pub async fn handle_risk_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RiskAnalysisRequest>,
) -> Result<Json<RiskAnalysisResponse>, AppError> {
    verify_api_key(&state.config, &headers)?;
    require_field(&request.business_data, "business_data")?;

    let prompt = state
        .composer
        .risk_analysis(&request.business_data, request.risk_areas.as_deref());
    let analysis = state
        .llm
        .complete(&[
            ChatMessage::system(prompt.system),
            ChatMessage::user(prompt.user),
        ])
        .await?;

    Ok(Json(RiskAnalysisResponse {
        analysis,
        model: state.llm.model().to_string(),
    }))
}

/// POST /compliance-check
///
/// Document review against a caller-named compliance framework. The
/// framework is echoed back in the envelope.
pub async fn handle_compliance_check(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ComplianceCheckRequest>,
) -> Result<Json<ComplianceCheckResponse>, AppError> {
    verify_api_key(&state.config, &headers)?;
    require_field(&request.document, "document")?;
    require_field(&request.compliance_framework, "compliance_framework")?;

    let prompt = state
        .composer
        .compliance_check(&request.document, &request.compliance_framework);
    let compliance_report = state
        .llm
        .complete(&[
            ChatMessage::system(prompt.system),
            ChatMessage::user(prompt.user),
        ])
        .await?;

    Ok(Json(ComplianceCheckResponse {
        compliance_report,
        framework: request.compliance_framework,
    }))
}

/// POST /due-diligence
///
/// Due diligence report on company information, optionally scoped.
pub async fn handle_due_diligence(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DueDiligenceRequest>,
) -> Result<Json<DueDiligenceResponse>, AppError> {
    verify_api_key(&state.config, &headers)?;
    require_field(&request.company_info, "company_info")?;

    let prompt = state
        .composer
        .due_diligence(&request.company_info, request.focus_areas.as_deref());
    let due_diligence_report = state
        .llm
        .complete(&[
            ChatMessage::system(prompt.system),
            ChatMessage::user(prompt.user),
        ])
        .await?;

    Ok(Json(DueDiligenceResponse {
        due_diligence_report,
        model: state.llm.model().to_string(),
    }))
}

fn require_field(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Router tests — stubbed completion backend, no network
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::advisor::PromptComposer;
    use crate::config::{Config, Provider};
    use crate::llm_client::{ChatMessage, CompletionClient, LlmError};
    use crate::routes::build_router;
    use crate::state::AppState;

    enum StubOutcome {
        Reply(&'static str),
        Fail(&'static str),
    }

    /// Counts invocations so tests can assert the upstream was never hit.
    struct StubClient {
        calls: Arc<AtomicUsize>,
        outcome: StubOutcome,
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(!messages.is_empty());
            match &self.outcome {
                StubOutcome::Reply(text) => Ok(text.to_string()),
                StubOutcome::Fail(message) => Err(LlmError::Api {
                    status: 429,
                    message: message.to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            provider: Provider::Groq,
            provider_api_key: "test-provider-key".to_string(),
            api_key: api_key.map(String::from),
            model: None,
            org_name: "Southern Shade LLC".to_string(),
            risk_tolerance: "moderate".to_string(),
            primary_market: "US_GOV_AND_ENTERPRISE".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn test_app(
        api_key: Option<&str>,
        outcome: StubOutcome,
    ) -> (axum::Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = test_config(api_key);
        let state = AppState {
            llm: Arc::new(StubClient {
                calls: calls.clone(),
                outcome,
            }),
            composer: Arc::new(PromptComposer::new(&config)),
            config: Arc::new(config),
        };
        (build_router(state), calls)
    }

    fn post_json(uri: &str, api_key: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(key) = api_key {
            builder = builder.header("X-API-Key", key);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_needs_no_key() {
        let (app, _) = test_app(Some("secret"), StubOutcome::Reply("unused"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["service"], "FREDRICK AI");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn chat_returns_completion_and_model() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("Expand carefully."));
        let request = post_json(
            "/chat",
            Some("secret"),
            json!({"message": "Should we expand?", "context": "Considering Mexico"}),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "Expand carefully.");
        assert_eq!(body["model"], "stub-model");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn risk_analysis_returns_analysis_and_model() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("Overall Risk Level: Low."));
        let request = post_json(
            "/risk-analysis",
            Some("secret"),
            json!({
                "business_data": "Q3 revenue down 40%",
                "risk_areas": ["financial", "operational"]
            }),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["analysis"], "Overall Risk Level: Low.");
        assert_eq!(body["model"], "stub-model");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_key_is_unauthorized_and_skips_upstream() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("unused"));
        let request = post_json("/chat", None, json!({"message": "hello"}));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wrong_key_is_unauthorized_and_skips_upstream() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("unused"));
        let request = post_json("/risk-analysis", Some("nope"), json!({"business_data": "q3"}));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unconfigured_secret_is_a_server_error() {
        let (app, calls) = test_app(None, StubOutcome::Reply("unused"));
        let request = post_json("/chat", Some("anything"), json!({"message": "hello"}));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "API_KEY_NOT_CONFIGURED");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_required_field_is_a_validation_error() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("unused"));
        let request = post_json("/chat", Some("secret"), json!({"message": "   "}));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_carries_causal_text_and_no_partial_content() {
        let (app, _) = test_app(Some("secret"), StubOutcome::Fail("quota exceeded"));
        let request = post_json(
            "/risk-analysis",
            Some("secret"),
            json!({"business_data": "Q3 revenue down 40%"}),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("quota exceeded"));
        assert!(body.get("analysis").is_none());
    }

    #[tokio::test]
    async fn compliance_check_echoes_framework() {
        let (app, _) = test_app(Some("secret"), StubOutcome::Reply("Non-compliant: overtime."));
        let request = post_json(
            "/compliance-check",
            Some("secret"),
            json!({
                "document": "Employee shall work 50 hours/week without overtime pay.",
                "compliance_framework": "Texas Labor Law"
            }),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["framework"], "Texas Labor Law");
        assert_eq!(body["compliance_report"], "Non-compliant: overtime.");
        assert!(!body["compliance_report"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn due_diligence_accepts_optional_focus_areas() {
        let (app, calls) = test_app(Some("secret"), StubOutcome::Reply("No red flags."));
        let request = post_json(
            "/due-diligence",
            Some("secret"),
            json!({"company_info": "Acme Corp, founded 2019"}),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["due_diligence_report"], "No red flags.");
        assert_eq!(body["model"], "stub-model");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
