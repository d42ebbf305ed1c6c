// Platform access to the injected wallet provider.
//
// The gate only sees `wallet::EthereumProvider`; this module is where
// `window.ethereum` is found (wasm32) or reported absent (everything else).

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::warn;
    use futures::future::FutureExt;
    use futures::future::LocalBoxFuture;
    use js_sys::Array;
    use js_sys::Function;
    use js_sys::Object;
    use js_sys::Promise;
    use js_sys::Reflect;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wallet::provider::EthereumProvider;
    use wallet::provider::Listener;
    use wallet::provider::ListenerId;
    use wallet::provider::ProviderError;
    use wallet::provider::ProviderEvent;
    use wallet::provider::ProviderNotification;
    use wallet::provider::RpcMethod;

    /// Returns `window.ethereum`, if an extension injected one.
    pub fn injected_provider() -> Option<Rc<dyn EthereumProvider>> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        debug!("found injected ethereum provider");
        Some(Rc::new(InjectedProvider::new(ethereum)))
    }

    struct Registered {
        event: ProviderEvent,
        callback: Closure<dyn FnMut(JsValue)>,
    }

    /// EIP-1193 provider backed by the browser object.
    ///
    /// Keeps each listener's JS closure alive until `remove_listener`, since
    /// `removeListener` needs the same function reference that `on` got.
    pub struct InjectedProvider {
        ethereum: JsValue,
        listeners: RefCell<HashMap<ListenerId, Registered>>,
        next_id: Cell<u64>,
    }

    impl InjectedProvider {
        fn new(ethereum: JsValue) -> Self {
            Self {
                ethereum,
                listeners: RefCell::new(HashMap::new()),
                next_id: Cell::new(0),
            }
        }

        fn function(&self, name: &str) -> Option<Function> {
            Reflect::get(&self.ethereum, &JsValue::from_str(name))
                .ok()?
                .dyn_into::<Function>()
                .ok()
        }
    }

    impl EthereumProvider for InjectedProvider {
        fn request(
            &self,
            method: RpcMethod,
        ) -> LocalBoxFuture<'static, Result<Vec<String>, ProviderError>> {
            let ethereum = self.ethereum.clone();
            let request = self.function("request");
            async move {
                let request = request
                    .ok_or_else(|| ProviderError::new(None, "provider has no request method"))?;
                let args = Object::new();
                Reflect::set(
                    &args,
                    &JsValue::from_str("method"),
                    &JsValue::from_str(method.as_str()),
                )
                .map_err(provider_error)?;
                let pending = request.call1(&ethereum, &args).map_err(provider_error)?;
                let value = JsFuture::from(Promise::resolve(&pending))
                    .await
                    .map_err(provider_error)?;
                Ok(string_list(&value))
            }
            .boxed_local()
        }

        fn on(&self, event: ProviderEvent, mut listener: Listener) -> Option<ListenerId> {
            let on = self.function("on")?;
            let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                let notification = match event {
                    ProviderEvent::AccountsChanged => {
                        ProviderNotification::AccountsChanged(string_list(&payload))
                    }
                    ProviderEvent::ChainChanged => {
                        ProviderNotification::ChainChanged(payload.as_string().unwrap_or_default())
                    }
                };
                listener(notification);
            });

            if let Err(e) = on.call2(
                &self.ethereum,
                &JsValue::from_str(event.as_str()),
                callback.as_ref(),
            ) {
                warn!("ethereum.on({}) failed: {}", event.as_str(), provider_error(e));
                return None;
            }

            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners
                .borrow_mut()
                .insert(id, Registered { event, callback });
            Some(id)
        }

        fn remove_listener(&self, id: ListenerId) {
            let Some(registered) = self.listeners.borrow_mut().remove(&id) else {
                return;
            };
            // The closure may only be freed once the provider has let go of
            // it; otherwise the next event calls into a dropped closure.
            let Some(remove) = self.function("removeListener") else {
                debug!(
                    "provider has no removeListener, leaving {} listener attached",
                    registered.event.as_str()
                );
                registered.callback.forget();
                return;
            };
            if let Err(e) = remove.call2(
                &self.ethereum,
                &JsValue::from_str(registered.event.as_str()),
                registered.callback.as_ref(),
            ) {
                warn!(
                    "ethereum.removeListener({}) failed: {}",
                    registered.event.as_str(),
                    provider_error(e)
                );
                registered.callback.forget();
            }
        }
    }


    fn string_list(value: &JsValue) -> Vec<String> {
        if Array::is_array(value) {
            Array::from(value)
                .iter()
                .filter_map(|v| v.as_string())
                .collect()
        } else {
            Vec::new()
        }
    }

    // EIP-1193 errors are plain objects with `code` and `message`.
    fn provider_error(err: JsValue) -> ProviderError {
        let code = Reflect::get(&err, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
            .map(|c| c as i64);
        let message = Reflect::get(&err, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "unknown provider error".to_string());
        ProviderError::new(code, message)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::rc::Rc;

    use wallet::provider::EthereumProvider;

    /// There is no browser extension outside the web target.
    pub fn injected_provider() -> Option<Rc<dyn EthereumProvider>> {
        None
    }
}
