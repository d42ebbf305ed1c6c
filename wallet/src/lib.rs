//! Platform-independent wallet gate logic.
//!
//! Everything here is renderer-agnostic: the `ui` crate owns the Dioxus
//! components and the `window.ethereum` binding, while this crate owns the
//! session state machine and the operations that drive it.

pub mod account;
pub mod config;
pub mod error;
pub mod gate;
pub mod provider;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use account::Account;
pub use error::WalletError;
pub use gate::GateAction;
pub use provider::EthereumProvider;
pub use provider::ProviderError;
pub use provider::ProviderEvent;
pub use provider::ProviderNotification;
pub use provider::RpcMethod;
pub use session::GateView;
pub use session::SessionEvent;
pub use session::WalletSession;
