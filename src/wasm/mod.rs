//! Browser front end.
//!
//! Wires the page to a [`WalletSession`]:
//! ```text
//! load:  hostname → endpoint pick → RpcNetworkClient
//! #connectBtn     click → session.connect()
//! #blockHeightBtn click → session.check_block_height()
//! ```
//!
//! A click that arrives while the session is busy with another action is
//! dropped.

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

mod provider;
mod view;

pub use provider::{WindowInjection, WindowProvider};
pub use view::DomView;

use std::rc::Rc;
use std::time::Duration;

use futures_util::lock::Mutex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::chain::RpcNetworkClient;
use crate::config::{resolve_rpc_endpoint, NetworkConfig};
use crate::session::WalletSession;

type SharedSession = Rc<Mutex<WalletSession<DomView>>>;

/// Entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let hostname = window.location().hostname().ok();

    let network_config = NetworkConfig::default();
    let endpoint = resolve_rpc_endpoint(hostname.as_deref(), &network_config, &mut rand::thread_rng());
    log!("RPC endpoint: {} ({:?})", endpoint.url, endpoint.source);

    let network = RpcNetworkClient::new(
        &endpoint.url,
        Duration::from_secs(network_config.request_timeout_secs),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let view = DomView::from_document(&document).map_err(|e| JsValue::from_str(&e))?;
    let connect_button = view.connect_button.clone();
    let block_height_button = view.block_height_button.clone();

    let session: SharedSession = Rc::new(Mutex::new(WalletSession::new(
        Box::new(WindowInjection),
        Box::new(network),
        view,
    )));

    let connect_session = session.clone();
    on_click(&connect_button, move || {
        let session = connect_session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(mut session) = session.try_lock() else {
                log!("Action already in progress, ignoring click");
                return;
            };
            if let Err(e) = session.connect().await {
                log!("connect failed: {}", e);
            }
        });
    })?;

    on_click(&block_height_button, move || {
        let session = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(mut session) = session.try_lock() else {
                log!("Action already in progress, ignoring click");
                return;
            };
            if let Err(e) = session.check_block_height().await {
                log!("block height check failed: {}", e);
            }
        });
    })?;

    Ok(())
}

fn on_click(element: &Element, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut()>::new(handler);
    element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    handler.forget();
    Ok(())
}
