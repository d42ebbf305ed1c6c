//! An in-memory [`EthereumProvider`] for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::FutureExt;
use futures::future::LocalBoxFuture;

use crate::provider::EthereumProvider;
use crate::provider::Listener;
use crate::provider::ListenerId;
use crate::provider::ProviderError;
use crate::provider::ProviderEvent;
use crate::provider::ProviderNotification;
use crate::provider::RpcMethod;

#[derive(Default)]
struct State {
    authorized: Vec<String>,
    grant_on_request: Vec<String>,
    failures: VecDeque<(RpcMethod, ProviderError)>,
    calls: Vec<RpcMethod>,
    listeners: BTreeMap<ListenerId, (ProviderEvent, Rc<RefCell<Listener>>)>,
    next_id: u64,
    events_supported: bool,
}

/// Scriptable provider. Clones share state.
#[derive(Clone)]
pub struct FakeProvider {
    state: Rc<RefCell<State>>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                events_supported: true,
                ..Default::default()
            })),
        }
    }

    /// Accounts returned by `eth_accounts`.
    pub fn with_authorized<S: Into<String>>(self, accounts: impl IntoIterator<Item = S>) -> Self {
        self.state.borrow_mut().authorized = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Accounts the user "approves" on `eth_requestAccounts`.
    pub fn granting<S: Into<String>>(self, accounts: impl IntoIterator<Item = S>) -> Self {
        self.state.borrow_mut().grant_on_request = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Behaves like a provider with no `on`/`removeListener`.
    pub fn without_events(self) -> Self {
        self.state.borrow_mut().events_supported = false;
        self
    }

    /// The next `method` call fails with `error`.
    pub fn fail_next(&self, method: RpcMethod, error: ProviderError) {
        self.state.borrow_mut().failures.push_back((method, error));
    }

    pub fn calls(&self) -> Vec<RpcMethod> {
        self.state.borrow().calls.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Delivers `notification` to every listener registered for its event.
    pub fn emit(&self, notification: ProviderNotification) {
        let event = notification.event();
        let targets: Vec<_> = self
            .state
            .borrow()
            .listeners
            .values()
            .filter(|(e, _)| *e == event)
            .map(|(_, l)| l.clone())
            .collect();
        for listener in targets {
            let mut callback = listener.borrow_mut();
            (*callback)(notification.clone());
        }
    }
}

impl EthereumProvider for FakeProvider {
    fn request(&self, method: RpcMethod) -> LocalBoxFuture<'static, Result<Vec<String>, ProviderError>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(method);

        let pending = state.failures.iter().position(|(m, _)| *m == method);
        let failure = pending.and_then(|i| state.failures.remove(i));

        let result = match failure {
            Some((_, error)) => Err(error),
            None => match method {
                RpcMethod::EthAccounts => Ok(state.authorized.clone()),
                RpcMethod::EthRequestAccounts => {
                    let granted = state.grant_on_request.clone();
                    if !granted.is_empty() {
                        state.authorized = granted.clone();
                    }
                    Ok(granted)
                }
            },
        };
        futures::future::ready(result).boxed_local()
    }

    fn on(&self, event: ProviderEvent, listener: Listener) -> Option<ListenerId> {
        let mut state = self.state.borrow_mut();
        if !state.events_supported {
            return None;
        }
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state
            .listeners
            .insert(id, (event, Rc::new(RefCell::new(listener))));
        Some(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.remove(&id);
    }
}
