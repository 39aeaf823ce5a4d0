//! Request handlers for the parse endpoint and the liveness probe.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use flowmap_parser::{parse, BpmnModel, ParserError};

/// Body of the parse endpoint.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// The complete BPMN XML document.
    pub text: String,
}

/// Error surface of the parse endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// The `text` field was empty or whitespace.
    EmptyInput,

    /// The document was rejected by the parser.
    Parse(ParserError),

    /// An unanticipated failure inside the core.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "field 'text' must not be empty".to_string(),
            ),
            ApiError::Parse(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error while parsing document".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "detail": "flowmap BPMN parser API" }))
}

/// Parse a BPMN document submitted as `{"text": "<xml...>"}`.
pub async fn parse_bpmn(Json(payload): Json<ParseRequest>) -> Result<Json<BpmnModel>, ApiError> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::EmptyInput);
    }

    // The parse is CPU-bound, so it runs off the async workers. A panic
    // inside the core surfaces here as a join error and is reported as an
    // internal error instead of taking the worker down.
    let result = tokio::task::spawn_blocking(move || parse(&payload.text))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "parser task failed");
            ApiError::Internal
        })?;

    match result {
        Ok(model) => Ok(Json(model)),
        Err(e) if e.is_client_error() => {
            tracing::debug!(error = %e, "rejected document");
            Err(ApiError::Parse(e))
        }
        Err(e) => {
            tracing::error!(error = %e, "unexpected parser failure");
            Err(ApiError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn request(
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = crate::router()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value = serde_json::from_slice(&bytes).expect("json body");
        (status, value)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = request("GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn parse_valid_document_returns_model() {
        let xml = r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
          <process id="p" name="Demo" isExecutable="true">
            <startEvent id="S"/>
            <task id="T"/>
            <endEvent id="E"/>
            <sequenceFlow id="f1" sourceRef="S" targetRef="T"/>
            <sequenceFlow id="f2" sourceRef="T" targetRef="E"/>
          </process>
        </definitions>"#;

        let (status, body) = request("POST", "/parse-bpmn", Some(json!({ "text": xml }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Demo");
        assert_eq!(body["flow_order"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["flow_order"][2]["path"], json!(["f1", "f2"]));
    }

    #[tokio::test]
    async fn empty_text_returns_400() {
        let (status, body) = request("POST", "/parse-bpmn", Some(json!({ "text": "  " }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().expect("error").contains("empty"));
    }

    #[tokio::test]
    async fn malformed_xml_returns_400() {
        let (status, body) =
            request("POST", "/parse-bpmn", Some(json!({ "text": "<unclosed" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error")
            .contains("XML parsing failed"));
    }

    #[tokio::test]
    async fn document_without_process_returns_400() {
        let (status, body) = request(
            "POST",
            "/parse-bpmn",
            Some(json!({ "text": "<definitions><process id=\"empty\"/></definitions>" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error")
            .contains("no valid process"));
    }
}
