//! Requests that need a logged in user

use crate::Client;

mod orders;
mod products;
mod users;

impl Client {
    /// Forgets the session locally
    ///
    /// The API keeps no server side session so nothing is sent. Any login
    /// still in flight is discarded when its response arrives.
    #[tracing::instrument]
    pub fn logout(&self) {
        self.clear_session();
        tracing::info!("logged out");
    }
}
