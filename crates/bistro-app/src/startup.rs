//! Builds the [`Client`] the app talks to the API with

use bistro_client_core::{Client, SessionStore};
#[cfg(not(target_arch = "wasm32"))]
use tracing::{info, warn};

#[cfg(not(target_arch = "wasm32"))]
use crate::{cli::Cli, configuration::Configuration};

/// The URL passed on the command line wins over the configuration files. The
/// session is kept in the configured storage folder, or only in memory if that
/// folder cannot be used.
#[cfg(not(target_arch = "wasm32"))]
pub fn native_client(cli: &Cli, configuration: Option<&Configuration>) -> Client {
    use bistro_client_core::FileBackend;
    use bistro_shared::const_config::client::CLIENT_DEFAULT_API_BASE_URL;

    let server_address = cli
        .server_url
        .clone()
        .or_else(|| configuration.map(|x| x.client.api_base_url.clone()))
        .unwrap_or_else(|| CLIENT_DEFAULT_API_BASE_URL.to_string());

    let session_store = match configuration.map(|x| FileBackend::new(&x.client.storage_dir)) {
        Some(Ok(backend)) => {
            info!(folder = ?backend.folder(), "session persisted to disk");
            SessionStore::load(backend)
        }
        Some(Err(err)) => {
            warn!(?err, "unable to use storage folder, session will not be persisted");
            SessionStore::in_memory()
        }
        None => SessionStore::in_memory(),
    };

    Client::new(server_address, session_store)
}

/// Uses `BISTRO_API_URL` from build time if it was set
#[cfg(target_arch = "wasm32")]
pub fn web_client() -> Client {
    use bistro_client_core::BrowserBackend;
    use bistro_shared::const_config::client::CLIENT_DEFAULT_API_BASE_URL;

    let server_address = option_env!("BISTRO_API_URL").unwrap_or(CLIENT_DEFAULT_API_BASE_URL);
    Client::new(server_address.to_string(), SessionStore::load(BrowserBackend))
}
