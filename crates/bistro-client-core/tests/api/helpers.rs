use bistro_client_core::{Client, LoginOutcome, MemoryBackend, SessionStore};
use bistro_shared::{
    req_args::auth::LoginReqArgs,
    session::Session,
    telemetry::{self, get_subscriber, init_subscriber},
};
use serde_json::json;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let log_file_name = format!("client_tests_{}", std::process::id());
        let (file, path) = telemetry::create_trace_file(&log_file_name).unwrap();
        let subscriber = get_subscriber(subscriber_name, default_filter_level, file);
        init_subscriber(subscriber).unwrap();
        format!("Traces for tests being written to: {path:?}")
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

/// A client talking to a mock of the API
pub struct TestApp {
    pub mock_server: MockServer,
    pub core_client: Client,
    /// Shared with the client's session store
    pub backend: MemoryBackend,
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

pub async fn spawn_app() -> TestApp {
    start_tracing();
    let mock_server = MockServer::start().await;
    let backend = MemoryBackend::default();
    let core_client = Client::new(mock_server.uri(), SessionStore::load(backend.clone()));
    TestApp {
        mock_server,
        core_client,
        backend,
    }
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}

pub fn login_args() -> LoginReqArgs {
    LoginReqArgs::new("ana@bistro.test", "correct horse".to_string().into())
}

pub fn admin_login_body() -> serde_json::Value {
    json!({
        "user": {
            "id": 1,
            "fullName": "Ana Torres",
            "name": "Ana",
            "email": "ana@bistro.test",
            "role": "ADMIN",
            "isActive": true
        },
        "menu": [
            {"name": "Dashboard", "path": "dashboard", "icon": "BarChart3", "permissions": ["READ"]},
            {"name": "Products", "path": "products", "icon": "Package", "permissions": ["READ", "WRITE", "DELETE", "CREATE"]},
            {"name": "New order", "path": "orders/create", "icon": "ShoppingCart", "permissions": ["READ", "CREATE"]},
            {"name": "Users", "path": "users", "icon": "Users", "permissions": ["READ", "WRITE", "CREATE"]}
        ]
    })
}

pub fn waiter_login_body() -> serde_json::Value {
    json!({
        "user": {
            "id": "2",
            "fullName": "Luis Pérez",
            "name": "Luis",
            "email": "luis@bistro.test",
            "role": "WAITER",
            "isActive": true
        },
        "menu": [
            {"name": "Products", "path": "products", "icon": "Package", "permissions": ["READ"]},
            {"name": "New order", "path": "orders/create", "icon": "ShoppingCart", "permissions": ["READ", "CREATE"]}
        ]
    })
}

impl TestApp {
    pub async fn mock_login(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Logs in with the given login response body and returns the stored session
    pub async fn login_with(&self, body: serde_json::Value) -> Arc<Session> {
        self.mock_login(ResponseTemplate::new(201).set_body_json(body))
            .await;
        let outcome = self
            .core_client
            .login(login_args(), no_cb)
            .await
            .unwrap()
            .unwrap();
        match outcome {
            LoginOutcome::Success(session) => session,
            other => panic!("expected a successful login but got {other:?}"),
        }
    }

    pub async fn login_as_admin(&self) -> Arc<Session> {
        self.login_with(admin_login_body()).await
    }
}
