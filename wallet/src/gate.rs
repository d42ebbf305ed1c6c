//! Operations behind the wallet gate.
//!
//! Each call talks to the provider and returns the [`SessionEvent`] to apply.
//! Applying it is left to the caller, which owns the session (a Dioxus signal
//! in the app, a plain value in tests).

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::account::Account;
use crate::error::WalletError;
use crate::provider::EthereumProvider;
use crate::provider::ProviderNotification;
use crate::provider::RpcMethod;
use crate::session::SessionEvent;

/// How the gate should react to a provider notification.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum GateAction {
    Apply(SessionEvent),
    /// Re-run the non-interactive check.
    Recheck,
}

/// First check on mount.
pub async fn initialize(provider: Option<&dyn EthereumProvider>) -> SessionEvent {
    match provider {
        Some(provider) => check_connection(provider).await,
        None => {
            warn!("no injected wallet provider found");
            SessionEvent::ProviderMissing
        }
    }
}

/// Non-interactive `eth_accounts` check.
pub async fn check_connection(provider: &dyn EthereumProvider) -> SessionEvent {
    let result = match provider.request(RpcMethod::EthAccounts).await {
        Ok(accounts) => {
            let account = Account::from_accounts(&accounts);
            match &account {
                Some(a) => info!("wallet already authorized: {}", a.abbreviated()),
                None => info!("wallet has no authorized accounts"),
            }
            Ok(account)
        }
        Err(e) => {
            warn!("eth_accounts failed: {}", e);
            Err(WalletError::ConnectionCheckFailed)
        }
    };
    SessionEvent::Checked(result)
}

/// Interactive `eth_requestAccounts`. May open the wallet's approval prompt.
pub async fn connect(provider: Option<&dyn EthereumProvider>) -> SessionEvent {
    let Some(provider) = provider else {
        warn!("connect requested without a wallet provider");
        return SessionEvent::Connected(Err(WalletError::ProviderMissing));
    };

    let result = match provider.request(RpcMethod::EthRequestAccounts).await {
        Ok(accounts) => {
            let account = Account::from_accounts(&accounts);
            if let Some(a) = &account {
                info!("wallet connected: {}", a.abbreviated());
            }
            Ok(account)
        }
        Err(e) if e.is_user_rejection() => {
            info!("user rejected wallet connection");
            Err(WalletError::UserRejected)
        }
        Err(e) => {
            warn!("eth_requestAccounts failed: {}", e);
            Err(WalletError::ConnectionRequestFailed)
        }
    };
    SessionEvent::Connected(result)
}

pub fn on_notification(notification: ProviderNotification) -> GateAction {
    match notification {
        ProviderNotification::AccountsChanged(accounts) => {
            debug!("accountsChanged: {} account(s)", accounts.len());
            GateAction::Apply(SessionEvent::AccountsChanged(accounts))
        }
        ProviderNotification::ChainChanged(chain_id) => {
            debug!("chainChanged: {}", chain_id);
            GateAction::Recheck
        }
    }
}

pub fn logout() -> SessionEvent {
    info!("clearing local wallet session");
    SessionEvent::LoggedOut
}
