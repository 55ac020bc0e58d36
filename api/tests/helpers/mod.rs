#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use rotireps_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::{net::TcpListener, sync::oneshot};

pub const TEST_MODEL: &str = "gemini-test";
pub const TEST_API_KEY: &str = "test-key";

/// What the fake Gemini endpoint answers with.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    Status(StatusCode, String),
}

/// A request received by the fake Gemini endpoint.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model_action: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

impl RecordedCall {
    pub fn prompt(&self) -> &str {
        self.body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
    }
}

#[derive(Clone)]
struct FakeGeminiState {
    calls: Arc<AtomicUsize>,
    recorded: Arc<Mutex<Vec<RecordedCall>>>,
    reply: Arc<Mutex<FakeReply>>,
}

async fn generate_content(
    State(state): State<FakeGeminiState>,
    Path(model_action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.recorded.lock().unwrap().push(RecordedCall {
        model_action,
        query,
        body,
    });

    let reply = state.reply.lock().unwrap().clone();
    match reply {
        FakeReply::Text(text) => Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        }))
        .into_response(),
        FakeReply::Status(status, body) => (status, body).into_response(),
    }
}

/// Stand-in for the Gemini REST API, listening on an ephemeral local port.
pub struct FakeGemini {
    pub base_url: String,
    state: FakeGeminiState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeGemini {
    pub async fn start() -> Self {
        let state = FakeGeminiState {
            calls: Arc::new(AtomicUsize::new(0)),
            recorded: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(FakeReply::Text(String::new()))),
        };

        let app = Router::new()
            .route("/v1beta/models/{model_action}", post(generate_content))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake Gemini listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let (shutdown, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    stopped.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}/v1beta", addr),
            state,
            shutdown: Some(shutdown),
        }
    }

    pub fn reply_with_text(&self, text: &str) {
        *self.state.reply.lock().unwrap() = FakeReply::Text(text.to_string());
    }

    pub fn reply_with_status(&self, status: StatusCode, body: &str) {
        *self.state.reply.lock().unwrap() = FakeReply::Status(status, body.to_string());
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

pub fn test_args(gemini_base_url: &str) -> Args {
    Args {
        server: ServerArgs::default(),
        llm: LlmArgs {
            gemini_api_key: TEST_API_KEY.to_string(),
            gemini_model: TEST_MODEL.to_string(),
            gemini_base_url: gemini_base_url.to_string(),
            code_execution: true,
            structured_output: false,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

/// The application router wired to a fresh fake Gemini.
pub struct AppContext {
    pub gemini: FakeGemini,
    pub server: TestServer,
}

impl AsyncTestContext for AppContext {
    async fn setup() -> Self {
        let gemini = FakeGemini::start().await;
        let args = Arc::new(test_args(&gemini.base_url));
        let app = router(state(args)).expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to start test server");

        Self { gemini, server }
    }

    async fn teardown(mut self) {
        self.gemini.stop();
    }
}
