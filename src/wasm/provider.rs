//! Window-injected wallet providers.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::session::types::{SessionError, SessionResult};
use crate::wallet::discovery::ProviderSource;
use crate::wallet::provider::{ProviderError, ProviderHandle, WalletProvider};

#[derive(Serialize)]
struct RequestArgs<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// An EIP-1193 object found on `window`.
pub struct WindowProvider {
    name: &'static str,
    inner: JsValue,
}

impl WindowProvider {
    pub fn new(name: &'static str, inner: JsValue) -> Self {
        Self { name, inner }
    }
}

#[async_trait(?Send)]
impl WalletProvider for WindowProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderError> {
        let request_fn: Function = Reflect::get(&self.inner, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| ProviderError::new("Provider has no request function"))?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let args = RequestArgs { method, params }
            .serialize(&serializer)
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let promise: Promise = request_fn
            .call1(&self.inner, &args)
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ProviderError::new("Provider request did not return a promise"))?;

        let result = JsFuture::from(promise).await.map_err(js_error)?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| ProviderError::new(e.to_string()))
    }
}

/// Turn a thrown JS value into `{ code, message }`.
fn js_error(err: JsValue) -> ProviderError {
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown provider error".to_string());
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    ProviderError { code, message }
}

/// Checks `window.phantom.ethereum`, then `window.ethereum`, on every connect.
#[derive(Debug, Default)]
pub struct WindowInjection;

impl WindowInjection {
    fn lookup(path: &[&str]) -> Option<JsValue> {
        let window = web_sys::window()?;
        let mut current: JsValue = window.into();
        for key in path {
            current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
            if current.is_undefined() || current.is_null() {
                return None;
            }
        }
        Some(current)
    }
}

impl ProviderSource for WindowInjection {
    fn discover(&self) -> SessionResult<ProviderHandle> {
        if let Some(phantom) = Self::lookup(&["phantom", "ethereum"]) {
            return Ok(Rc::new(WindowProvider::new("phantom", phantom)));
        }
        if let Some(ethereum) = Self::lookup(&["ethereum"]) {
            return Ok(Rc::new(WindowProvider::new("ethereum", ethereum)));
        }
        Err(SessionError::NoProviderFound)
    }
}
