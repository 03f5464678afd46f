//! Endpoint and cookie settings with an optional runtime override. Native hosts
//! read `RYOS_BASE_URL` and `RYOS_COOKIE_NAME` from the environment; browsers
//! read `window.RYOS_CONFIG` (if present) so static deployments can point at a
//! different service without rebuilding. Configuration values are public; do
//! not store secrets here.

pub const DEFAULT_BASE_URL: &str = "https://ryos.org";
pub const DEFAULT_COOKIE_NAME: &str = "ryos_session";

/// Query parameter carrying the one-time code on the callback URL.
pub const CODE_PARAM: &str = "ryos";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub cookie_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Defaults with runtime overrides applied.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = cookie_name.into();
        self
    }

    #[must_use]
    pub fn validate_url(&self) -> String {
        format!("{}/validate", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    base_url: Option<String>,
    cookie_name: Option<String>,
}

fn apply_runtime_overrides(config: &mut Config, runtime: RuntimeConfig) {
    if let Some(value) = runtime.base_url {
        config.base_url = value;
    }
    if let Some(value) = runtime.cookie_name {
        config.cookie_name = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("RYOS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        base_url: read_runtime_value(&object, "base_url"),
        cookie_name: read_runtime_value(&object, "cookie_name"),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    let read = |key: &str| {
        std::env::var(key)
            .ok()
            .and_then(|value| normalize_runtime_value(&value))
    };

    Some(RuntimeConfig {
        base_url: read("RYOS_BASE_URL"),
        cookie_name: read("RYOS_COOKIE_NAME"),
    })
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
