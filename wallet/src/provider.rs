//! The seam between the gate and the browser-injected EIP-1193 provider.
//!
//! The gate never touches `window.ethereum` directly. It is handed an
//! [`EthereumProvider`] so the browser binding and the test fake are
//! interchangeable.

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// The account methods the gate issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr, strum::EnumIs)]
pub enum RpcMethod {
    /// Non-interactive: returns already-authorized accounts.
    #[strum(serialize = "eth_accounts")]
    EthAccounts,
    /// Interactive: may prompt the user to authorize access.
    #[strum(serialize = "eth_requestAccounts")]
    EthRequestAccounts,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Provider events the gate listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum ProviderEvent {
    #[strum(serialize = "accountsChanged")]
    AccountsChanged,
    #[strum(serialize = "chainChanged")]
    ChainChanged,
}

impl ProviderEvent {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Payload delivered to a listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderNotification {
    AccountsChanged(Vec<String>),
    ChainChanged(String),
}

impl ProviderNotification {
    pub fn event(&self) -> ProviderEvent {
        match self {
            Self::AccountsChanged(_) => ProviderEvent::AccountsChanged,
            Self::ChainChanged(_) => ProviderEvent::ChainChanged,
        }
    }
}

/// A failed `request` call, as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn user_rejected() -> Self {
        Self::new(Some(USER_REJECTED_CODE), "User rejected the request.")
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Handle returned by [`EthereumProvider::on`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub type Listener = Box<dyn FnMut(ProviderNotification)>;

/// An injected wallet provider.
///
/// Everything runs on the single UI thread, so nothing here is `Send`.
pub trait EthereumProvider {
    fn request(&self, method: RpcMethod) -> LocalBoxFuture<'static, Result<Vec<String>, ProviderError>>;

    /// Registers `listener` for `event`.
    ///
    /// Returns `None` when the provider has no event API, in which case the
    /// listener is dropped and never called.
    fn on(&self, event: ProviderEvent, listener: Listener) -> Option<ListenerId>;

    fn remove_listener(&self, id: ListenerId);
}

/// A registered listener. Deregisters itself when dropped.
#[must_use = "dropping a Subscription removes the listener"]
pub struct Subscription {
    provider: Rc<dyn EthereumProvider>,
    event: ProviderEvent,
    id: ListenerId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        dioxus_logger::tracing::debug!("removing {} listener", self.event.as_str());
        self.provider.remove_listener(self.id);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish()
    }
}

/// The pair of listeners the gate keeps while mounted.
#[derive(Debug, Default)]
#[must_use = "dropping ProviderSubscriptions removes the listeners"]
pub struct ProviderSubscriptions {
    subscriptions: Vec<Subscription>,
}

impl ProviderSubscriptions {
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

/// Subscribes `handler` to account and chain changes.
///
/// Both listeners are released when the returned value is dropped.
pub fn subscribe<F>(provider: &Rc<dyn EthereumProvider>, handler: F) -> ProviderSubscriptions
where
    F: Fn(ProviderNotification) + 'static,
{
    let handler = Rc::new(handler);
    let subscriptions = [ProviderEvent::AccountsChanged, ProviderEvent::ChainChanged]
        .into_iter()
        .filter_map(|event| {
            let handler = handler.clone();
            let id = provider.on(event, Box::new(move |n| (*handler)(n)))?;
            Some(Subscription {
                provider: provider.clone(),
                event,
                id,
            })
        })
        .collect();
    ProviderSubscriptions { subscriptions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;
    use std::cell::RefCell;

    #[test]
    fn wire_names() {
        assert_eq!(RpcMethod::EthAccounts.as_str(), "eth_accounts");
        assert_eq!(RpcMethod::EthRequestAccounts.as_str(), "eth_requestAccounts");
        assert_eq!(ProviderEvent::AccountsChanged.as_str(), "accountsChanged");
        assert_eq!(ProviderEvent::ChainChanged.as_str(), "chainChanged");
    }

    #[test]
    fn rejection_is_code_4001_only() {
        assert!(ProviderError::user_rejected().is_user_rejection());
        assert!(!ProviderError::new(Some(-32002), "pending").is_user_rejection());
        assert!(!ProviderError::new(None, "boom").is_user_rejection());
    }

    #[test]
    fn listeners_are_released_on_drop() {
        let fake = FakeProvider::new();
        let provider: Rc<dyn EthereumProvider> = Rc::new(fake.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subs = {
            let seen = seen.clone();
            subscribe(&provider, move |n| seen.borrow_mut().push(n))
        };
        assert_eq!(subs.len(), 2);
        assert_eq!(fake.listener_count(), 2);

        fake.emit(ProviderNotification::ChainChanged("0x1".into()));
        assert_eq!(seen.borrow().len(), 1);

        drop(subs);
        assert_eq!(fake.listener_count(), 0);

        fake.emit(ProviderNotification::ChainChanged("0x5".into()));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn provider_without_event_api_yields_no_subscriptions() {
        let fake = FakeProvider::new().without_events();
        let provider: Rc<dyn EthereumProvider> = Rc::new(fake.clone());
        let subs = subscribe(&provider, |_| {});
        assert!(subs.is_empty());
        assert_eq!(fake.listener_count(), 0);
    }
}
