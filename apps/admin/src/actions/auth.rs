//! Auth actions: login, session restore, logout.

use bolt_client::api;
use bolt_client::api::auth::LoginRequest;
use bolt_client::ApiClient;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::session::{self, Session};
use crate::state::Store;

/// Log in and persist the session. Returns a client authorized with the
/// new token; the caller uses it for everything after this.
pub async fn login(
    store: &Store,
    client: &ApiClient,
    email: &str,
    password: &str,
) -> AppResult<ApiClient> {
    store.with_mut(|s| s.auth.pending());

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    match api::auth::login(client, &request).await {
        Ok(auth) => {
            info!(user = %auth.user.email, "Logged in");
            if let Err(e) = session::save(&Session {
                token: auth.token.clone(),
                user: auth.user.clone(),
            }) {
                warn!("Could not persist session: {}", e.message);
            }
            let authorized = client.clone().with_token(auth.token.clone());
            store.with_mut(|s| s.auth.logged_in(auth.token, auth.user));
            Ok(authorized)
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.auth.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Restore a saved session into the store, if one exists. Returns a client
/// authorized with the restored token.
pub fn restore(store: &Store, client: &ApiClient) -> AppResult<Option<ApiClient>> {
    let Some(saved) = session::load()? else {
        return Ok(None);
    };

    info!(user = %saved.user.email, "Session restored");
    let authorized = client.clone().with_token(saved.token.clone());
    store.with_mut(|s| s.auth.logged_in(saved.token, saved.user));
    Ok(Some(authorized))
}

/// Log out server-side and locally. The token is dropped even when the
/// server call fails; a dead token is useless either way.
pub async fn logout(store: &Store, client: &ApiClient) -> AppResult<()> {
    if let Err(e) = api::auth::logout(client).await {
        warn!("Server logout failed: {}", e);
    }
    session::clear()?;
    store.with_mut(|s| s.auth.logged_out());
    info!("Logged out");
    Ok(())
}

/// Re-fetch the current user for the stored token, proving it still works.
pub async fn verify(store: &Store, client: &ApiClient) -> AppResult<()> {
    match api::auth::me(client).await {
        Ok(user) => {
            store.with_mut(|s| {
                let token = s.auth.token.clone().unwrap_or_default();
                s.auth.logged_in(token, user);
            });
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.auth.logged_out());
            Err(err)
        }
    }
}
