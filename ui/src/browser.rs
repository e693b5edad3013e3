//! Thin wrappers over the browser APIs the session needs: local storage,
//! the current location, and page navigation.

use std::collections::HashMap;

use gloo::history::{BrowserHistory, History};
use gloo::storage::{LocalStorage, Storage};
use mailchat_types::{IDENTITY_STORAGE_KEY, USER_EMAIL_PARAM};

use crate::error::StorageError;
use crate::session::IdentityStore;

/// [`IdentityStore`] backed by `window.localStorage`, holding the address
/// as a plain string rather than gloo's JSON encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalIdentityStore;

impl IdentityStore for LocalIdentityStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(IDENTITY_STORAGE_KEY)
            .map_err(|e| StorageError(format!("{e:?}")))
    }

    fn save(&self, identity: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(IDENTITY_STORAGE_KEY, identity)
            .map_err(|e| StorageError(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(IDENTITY_STORAGE_KEY)
            .map_err(|e| StorageError(format!("{e:?}")))
    }
}

/// Path the address bar is reset to once the login redirect is consumed.
const APP_ROOT: &str = "/";

/// Reads the address the backend appended after OAuth and, when present,
/// resets the address bar to the app root without reloading.
pub fn take_redirect_identity() -> Option<String> {
    take_redirect_from(&BrowserHistory::new())
}

fn take_redirect_from<H: History>(history: &H) -> Option<String> {
    let identity = match history.location().query::<HashMap<String, String>>() {
        Ok(mut params) => params
            .remove(USER_EMAIL_PARAM)
            .filter(|email| !email.is_empty()),
        Err(e) => {
            tracing::debug!("ignoring unparseable query: {e}");
            None
        }
    }?;

    history.replace(APP_ROOT);
    Some(identity)
}

/// Leaves the app for the backend's OAuth entry point.
pub fn navigate_to(url: &str) {
    if let Err(e) = gloo::utils::window().location().set_href(url) {
        tracing::error!("navigation to {url} failed: {e:?}");
    }
}

/// Blocking notice, the way the page reports rejected or failed sends.
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}
