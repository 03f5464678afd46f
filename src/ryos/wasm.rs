//! JavaScript bindings for pages that load the crate as a wasm module. The
//! exported functions mirror the `ryos.auth`, `ryos.logout`, `ryos.check`,
//! `ryos.validate` and `ryos.scopes` calls; each one builds a client for the
//! current page with [`Config::load`].

use super::{AuthClient, Config, environment::Browser, error::Error, scope};
use wasm_bindgen::prelude::*;

fn client() -> Result<AuthClient<Browser>, JsError> {
    AuthClient::with_config(Config::load(), Browser).map_err(js_error)
}

fn js_error(err: Error) -> JsError {
    JsError::new(&err.to_string())
}

/// Routes `tracing` output to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen]
pub fn auth(domain: &str, scope: Vec<String>, redirect: &str) -> Result<(), JsError> {
    client()?
        .initiate_auth(domain, &scope, redirect)
        .map(|_| ())
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn logout(cookie_name: Option<String>) -> Result<(), JsError> {
    let client = client()?;
    match cookie_name {
        Some(name) => client.logout_cookie(&name),
        None => client.logout(),
    }
    .map_err(js_error)
}

#[wasm_bindgen]
pub fn check() -> Result<Option<String>, JsError> {
    client()?.check().map_err(js_error)
}

#[wasm_bindgen]
pub async fn validate(code: String) -> bool {
    match client() {
        Ok(client) => client.validate(&code).await,
        Err(_) => false,
    }
}

/// The scope catalog as an array of `{ name, description }` objects.
#[wasm_bindgen]
pub fn scopes() -> Result<JsValue, JsError> {
    let json = serde_json::to_string(scope::catalog())?;
    js_sys::JSON::parse(&json).map_err(|err| {
        JsError::new(&err.as_string().unwrap_or_else(|| "invalid scope JSON".to_string()))
    })
}
