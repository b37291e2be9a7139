use anyhow::{anyhow, Context};
use bistro_shared::{
    const_config::{
        client::CLIENT_DEFAULT_API_BASE_URL,
        path::{PathSpec, PATH_AUTH_LOGIN},
    },
    req_args::auth::LoginReqArgs,
    send_or_discard,
    session::Session,
    uac::LoginResponse,
};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret as _;
use std::fmt::{Debug, Display};
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::session_store::SessionStore;

pub mod api;

/// Used for requests that do not carry a body or query string
pub const NO_ARGS: Option<&()> = None;

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    server_address: String,
    session_store: SessionStore,
    /// Incremented each time the session is cleared so that a login that was
    /// started before can tell it is no longer wanted
    session_generation: u64,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(
            CLIENT_DEFAULT_API_BASE_URL.to_string(),
            SessionStore::in_memory(),
        )
    }
}

#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(Arc<Session>),
    /// The server did not accept the email and password
    InvalidCredentials,
    /// A logout happened while the request was in flight, the response was
    /// not applied
    Discarded,
}

impl LoginOutcome {
    /// Returns `true` if the login outcome is [`Success`].
    ///
    /// [`Success`]: LoginOutcome::Success
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }
}

/// Method and resolved path of a request
#[derive(Debug)]
struct Endpoint {
    method: Method,
    path: String,
}

impl From<PathSpec> for Endpoint {
    fn from(value: PathSpec) -> Self {
        Self {
            method: value.method,
            path: value.path.to_string(),
        }
    }
}

impl Endpoint {
    fn with_id(spec: PathSpec, id: impl Display) -> Self {
        Self {
            path: spec.with_id(id),
            method: spec.method,
        }
    }
}

impl ClientInner {
    #[tracing::instrument]
    fn new(server_address: String, session_store: SessionStore) -> Self {
        Self {
            server_address,
            session_store,
            session_generation: 0,
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(server_address: String, session_store: SessionStore) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let api_client = builder.build().expect("Unable to create reqwest client");
        Self {
            api_client,
            inner: Arc::new(Mutex::new(ClientInner::new(
                server_address.trim_end_matches('/').to_string(),
                session_store,
            ))),
        }
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<LoginOutcome>> {
        let (tx, rx) = oneshot::channel();
        let args = serde_json::json!({
            "email": args.email,
            "password": args.password.expose_secret(),
        });
        let client = self.clone();
        let generation = self.session_generation();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_login(resp, client, generation).await;
            send_or_discard!(tx, msg);
            ui_notify();
        };

        self.initiate_request(PATH_AUTH_LOGIN, Some(&args), on_done);
        rx
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<E, T, F, O>(&self, endpoint: E, args: Option<&T>, on_done: F)
    where
        E: Into<Endpoint> + Debug,
        T: serde::Serialize + Debug,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let endpoint: Endpoint = endpoint.into();
        let is_get_method = endpoint.method == Method::GET;
        let mut request = self
            .api_client
            .request(endpoint.method, self.path_to_url(&endpoint.path));
        #[cfg(target_arch = "wasm32")]
        {
            // The browser keeps the cookies, it only needs to be told to send them
            request = request.fetch_credentials_include();
        }
        if let Some(args) = args {
            request = if is_get_method {
                request.query(args)
            } else {
                request.json(args)
            };
        }
        reqwest_cross::fetch(request, on_done)
    }

    fn send_request_expect_json<E, F, T, U>(
        &self,
        endpoint: E,
        args: Option<&T>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        E: Into<Endpoint> + Debug,
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
        U: Send + std::fmt::Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body(resp).await;
            send_or_discard!(tx, msg);
            ui_notify();
        };
        self.initiate_request(endpoint, args, on_done);
        rx
    }

    fn send_request_expect_success<E, F, T>(
        &self,
        endpoint: E,
        args: Option<&T>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        E: Into<Endpoint> + Debug,
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_success(resp).await;
            send_or_discard!(tx, msg);
            ui_notify();
        };
        self.initiate_request(endpoint, args, on_done);
        rx
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .server_address
        )
    }

    pub fn server_address(&self) -> String {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .server_address
            .clone()
    }

    pub fn session(&self) -> Option<Arc<Session>> {
        self.inner.lock().expect("mutex poisoned").session_store.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .session_store
            .is_logged_in()
    }

    fn session_generation(&self) -> u64 {
        self.inner.lock().expect("mutex poisoned").session_generation
    }

    /// Stores `session` unless the session was cleared after `generation` was
    /// read
    fn store_session(&self, session: Session, generation: u64) -> LoginOutcome {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if guard.session_generation != generation {
            info!("logout happened while logging in, login response discarded");
            return LoginOutcome::Discarded;
        }
        let session = Arc::new(session);
        // Still logged in for this run even if it could not be persisted
        bistro_shared::log_err_as_warn!(guard.session_store.save(Arc::clone(&session)));
        LoginOutcome::Success(session)
    }

    fn clear_session(&self) {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        guard.session_generation += 1;
        bistro_shared::log_err_as_warn!(guard.session_store.clear());
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_success(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(response
            .json()
            .await
            .context("failed to parse result as json")?)
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
    generation: u64,
) -> anyhow::Result<LoginOutcome> {
    let (response, status) = extract_response(response)?;
    match status {
        status if status.is_success() => {
            let login_response: LoginResponse = response
                .json()
                .await
                .context("failed to parse result as json")?;
            match Session::from_login_response(login_response) {
                Some(session) => Ok(client.store_session(session, generation)),
                None => Ok(LoginOutcome::InvalidCredentials),
            }
        }
        StatusCode::BAD_REQUEST
        | StatusCode::UNAUTHORIZED
        | StatusCode::FORBIDDEN
        | StatusCode::NOT_FOUND => {
            info!(?status, "credentials rejected");
            Ok(LoginOutcome::InvalidCredentials)
        }
        _ => Err(handle_error(response).await),
    }
}

/// Error bodies produced by the API (`{"statusCode": 400, "message": ...}`)
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: ApiErrorMessage,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ApiErrorMessage {
    Single(String),
    Many(Vec<String>),
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body");
    };
    if body.is_empty() {
        return anyhow!("request failed with status code: {status} and no body");
    }
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(ApiErrorBody {
            message: ApiErrorMessage::Single(message),
        }) => anyhow!("{message}"),
        Ok(ApiErrorBody {
            message: ApiErrorMessage::Many(messages),
        }) => anyhow!("{}", messages.join("; ")),
        Err(_) => anyhow!("{body}"),
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
