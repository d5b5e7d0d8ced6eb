//! Tool endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, InvokeToolRequest, InvokeToolResponse, ToolsResponse};
use crate::domain::tool::{tool_definitions, ToolContext};
use crate::infrastructure::event::CollectingEventEmitter;

/// GET /tools
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse::new(tool_definitions()))
}

/// POST /tools/{name}
///
/// Runs the tool and returns its text output along with every event the
/// call emitted, in order.
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<InvokeToolRequest>, JsonRejection>,
) -> Result<Json<InvokeToolResponse>, ApiError> {
    let Json(request) = payload?;
    debug!(tool = %name, user = ?request.user.as_ref().map(|u| u.id.as_str()), "Tool call received");

    let emitter = Arc::new(CollectingEventEmitter::new());
    let mut ctx = ToolContext::new().with_emitter(emitter.clone());

    if let Some(user) = request.user {
        ctx = ctx.with_user(user.id);
    }

    let output = state.tool.invoke(&name, request.arguments, &ctx).await?;
    let events = emitter.take().await;

    info!(tool = %name, events = events.len(), "Tool call completed");

    Ok(Json(InvokeToolResponse::new(name, output, events)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::api::state::AppState;
    use crate::domain::knowledge_base::{KnowledgeBase, KnowledgeBaseId};
    use crate::domain::retrieval::ChunkMetadata;
    use crate::domain::tool::{KnowledgeSearchTool, Valves};
    use crate::infrastructure::embedding::HashingEmbeddingProvider;
    use crate::infrastructure::knowledge_base::{AccessControl, InMemoryKnowledgeBaseCatalog};
    use crate::infrastructure::retrieval::InMemoryRetrievalService;
    use crate::infrastructure::user::InMemoryUserDirectory;
    use std::sync::Arc;

    async fn app() -> Router {
        let embedder = Arc::new(HashingEmbeddingProvider::default());
        let catalog = Arc::new(InMemoryKnowledgeBaseCatalog::new());
        let retrieval = Arc::new(InMemoryRetrievalService::new(embedder.clone()));
        let kb_id = KnowledgeBaseId::new("kb-hr").unwrap();

        catalog
            .insert(
                KnowledgeBase::new(kb_id.clone(), "HR Policies"),
                AccessControl::public(),
            )
            .await;

        let metadata = ChunkMetadata::from([("source".to_string(), json!("vacation.md"))]);
        retrieval
            .add_chunks(
                &kb_id,
                vec![(
                    "Employees receive 25 vacation days per year".to_string(),
                    metadata,
                )],
            )
            .await
            .unwrap();

        let tool = KnowledgeSearchTool::new(
            Valves::default().with_default_knowledge_bases("kb-hr"),
            retrieval,
            catalog.clone(),
            Arc::new(InMemoryUserDirectory::new()),
            embedder,
        );

        create_router(AppState::new(Arc::new(tool), catalog))
    }

    async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_tools() {
        let response = app()
            .await
            .oneshot(Request::get("/tools").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["object"], "list");
        assert_eq!(body["data"][0]["name"], "search_knowledge");
        assert_eq!(body["data"][1]["name"], "list_available_knowledge_bases");
    }

    #[tokio::test]
    async fn test_invoke_search_returns_output_and_events() {
        let (status, body) = post(
            app().await,
            "/tools/search_knowledge",
            json!({"arguments": {"query": "vacation days"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "search_knowledge");
        assert!(body["output"]
            .as_str()
            .unwrap()
            .contains("<source id=\"1\" name=\"vacation.md\">"));

        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["type"], "status");
        assert_eq!(events[0]["data"]["description"], "Searching knowledge bases...");
        assert_eq!(events[1]["type"], "citation");
        assert_eq!(events[1]["data"]["source"]["name"], "vacation.md");
        assert_eq!(events[2]["data"]["description"], "Found 1 relevant documents");
        assert_eq!(events[2]["data"]["done"], true);
    }

    #[tokio::test]
    async fn test_invoke_list_for_user() {
        let (status, body) = post(
            app().await,
            "/tools/list_available_knowledge_bases",
            json!({"user": {"id": "alice"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["output"].as_str().unwrap().contains("- **HR Policies** (ID: `kb-hr`)"));
        assert!(body["events"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_404() {
        let (status, body) = post(app().await, "/tools/format_disk", json!({})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_invoke_with_bad_arguments_is_400() {
        let (status, body) = post(
            app().await,
            "/tools/search_knowledge",
            json!({"arguments": {"knowledge_base_ids": "kb-hr"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_arguments");
    }

    #[tokio::test]
    async fn test_invoke_with_malformed_body_is_400() {
        let response = app()
            .await
            .oneshot(
                Request::post("/tools/search_knowledge")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
