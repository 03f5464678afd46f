use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

#[derive(Serialize)]
struct ValidateRequest<'a> {
    code: &'a str,
}

pub fn client() -> reqwest::Result<Client> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = Client::builder().user_agent(crate::APP_USER_AGENT);

    #[cfg(target_arch = "wasm32")]
    let builder = Client::builder();

    builder.build()
}

/// JavaScript truthiness of a JSON value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Exchanges a one-time code with the validation endpoint.
///
/// Network errors, non-2xx responses, unreadable bodies and a falsy `success`
/// field are all reported as `false`. The code itself is never logged.
#[instrument(skip(client, code))]
pub async fn exchange(client: &Client, url: &str, code: &str) -> bool {
    let response = match client
        .post(url)
        .json(&ValidateRequest { code })
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Error validating code: {:?}", e);

            return false;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Code validation failed: {}", status);

        return false;
    }

    match response.json::<Value>().await {
        Ok(body) => {
            let success = body.get("success").is_some_and(truthy);
            debug!("Code validation result: {}", success);

            success
        }
        Err(e) => {
            error!("Error parsing validation response: {:?}", e);

            false
        }
    }
}
