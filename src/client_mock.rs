use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use mockall::mock;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::FormsApi;
use crate::error::{ServiceError, Stage};
use crate::models::form::{BatchUpdateFormRequest, CreateFormRequest, Form};

// Define a mock of the Forms API
mock! {
    pub FormsService {}

    #[async_trait]
    impl FormsApi for FormsService {
        async fn create_form(&self, request: &CreateFormRequest) -> Result<Form, ServiceError>;

        async fn batch_update(
            &self,
            form_id: &str,
            request: &BatchUpdateFormRequest,
        ) -> Result<(), ServiceError>;
    }
}

/// A form as the mock service stores it
#[derive(Debug, Clone)]
pub struct StoredForm {
    pub form_id: String,
    pub request: CreateFormRequest,
    pub batches: Vec<BatchUpdateFormRequest>,
}

/// In-memory stand-in for the remote form storage
pub struct MockFormsStore {
    forms: Mutex<Vec<StoredForm>>,
    create_calls: AtomicUsize,
    batch_calls: AtomicUsize,
}

impl MockFormsStore {
    pub fn new() -> Self {
        Self {
            forms: Mutex::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
        }
    }

    pub fn forms(&self) -> Vec<StoredForm> {
        self.forms.lock().unwrap().clone()
    }

    pub fn form_ids(&self) -> Vec<String> {
        self.forms().into_iter().map(|f| f.form_id).collect()
    }

    fn create(&self, request: &CreateFormRequest) -> Form {
        let form_id = format!("form_{:016x}", rand::random::<u64>());
        self.forms.lock().unwrap().push(StoredForm {
            form_id: form_id.clone(),
            request: request.clone(),
            batches: Vec::new(),
        });

        Form {
            form_id,
            info: Some(request.info.clone()),
            responder_uri: None,
        }
    }

    fn apply(&self, form_id: &str, request: &BatchUpdateFormRequest) -> Result<(), ServiceError> {
        let mut forms = self.forms.lock().unwrap();
        match forms.iter_mut().find(|f| f.form_id == form_id) {
            Some(form) => {
                form.batches.push(request.clone());
                Ok(())
            }
            None => Err(ServiceError::Api {
                status: 404,
                message: format!("Requested entity was not found: {}", form_id),
            }),
        }
    }
}

fn injected_failure() -> ServiceError {
    ServiceError::Api {
        status: 503,
        message: "The service is currently unavailable.".to_string(),
    }
}

/// Set up a mock service backed by a [`MockFormsStore`].
pub fn setup_mock_service() -> (MockFormsService, Arc<MockFormsStore>) {
    setup_mock_service_failing_at(None)
}

/// Like [`setup_mock_service`], but the `n`th (1-based) call of the given stage fails.
pub fn setup_mock_service_failing_at(
    failure: Option<(Stage, usize)>,
) -> (MockFormsService, Arc<MockFormsStore>) {
    let store = Arc::new(MockFormsStore::new());
    let mut mock_service = MockFormsService::new();

    let store_ref1 = Arc::clone(&store);
    mock_service.expect_create_form().returning(move |request| {
        let call = store_ref1.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if failure == Some((Stage::Create, call)) {
            return Err(injected_failure());
        }
        Ok(store_ref1.create(request))
    });

    let store_ref2 = Arc::clone(&store);
    mock_service
        .expect_batch_update()
        .returning(move |form_id, request| {
            let call = store_ref2.batch_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if failure == Some((Stage::Populate, call)) {
                return Err(injected_failure());
            }
            store_ref2.apply(form_id, request)
        });

    (mock_service, store)
}

/// A request the fake HTTP server received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Scripted responses for the fake HTTP server, served in order.
/// Once the script runs out every request gets `fallback`.
pub struct FakeServerState {
    pub requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<Vec<(StatusCode, Value)>>,
    fallback: (StatusCode, Value),
}

impl FakeServerState {
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_and_reply(
    state: Arc<FakeServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, value) = {
        let mut responses = state.responses.lock().unwrap();
        if responses.is_empty() {
            state.fallback.clone()
        } else {
            responses.remove(0)
        }
    };

    // Null scripts an empty body
    if value.is_null() {
        return status.into_response();
    }
    (status, Json(value)).into_response()
}

/// Start a local HTTP server that records requests and replies from a script.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and the shared state.
pub async fn spawn_fake_server(
    responses: Vec<(StatusCode, Value)>,
) -> (String, Arc<FakeServerState>) {
    let state = Arc::new(FakeServerState {
        requests: Mutex::new(Vec::new()),
        responses: Mutex::new(responses),
        fallback: (
            StatusCode::NOT_FOUND,
            json!({ "error": { "code": 404, "message": "no scripted response", "status": "NOT_FOUND" } }),
        ),
    });

    let handler_state = Arc::clone(&state);
    let app = Router::new().fallback(move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
        record_and_reply(Arc::clone(&handler_state), method, uri, headers, body)
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}
