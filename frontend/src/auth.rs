//! Bearer token persistence in `localStorage`.

use web_sys::Storage;

use crate::config::AUTH_TOKEN_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

pub fn get_auth_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn set_auth_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

pub fn clear_auth_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

pub fn is_authenticated() -> bool {
    get_auth_token().is_some()
}
