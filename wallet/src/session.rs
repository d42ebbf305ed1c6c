//! Local wallet session state and its transitions.

use crate::account::Account;
use crate::error::WalletError;

/// What the gate currently knows about the wallet.
///
/// Lives for as long as the gate is mounted. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub account: Option<Account>,
    pub connected: bool,
    pub checking: bool,
    pub error: Option<String>,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs to [`WalletSession::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ProviderMissing,
    /// Outcome of a non-interactive `eth_accounts` check.
    Checked(Result<Option<Account>, WalletError>),
    /// The user pressed connect; the request is in flight.
    ConnectStarted,
    /// Outcome of an interactive `eth_requestAccounts` call.
    Connected(Result<Option<Account>, WalletError>),
    AccountsChanged(Vec<String>),
    LoggedOut,
}

/// Which of the three gate screens to render.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum GateView {
    Checking,
    Disconnected { error: Option<String> },
    Connected { account: Option<Account> },
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            account: None,
            connected: false,
            checking: true,
            error: None,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ProviderMissing => {
                self.error = Some(WalletError::ProviderMissing.to_string());
                self.checking = false;
            }
            SessionEvent::Checked(result) => {
                match result {
                    Ok(account) => self.set_account(account),
                    Err(e) => self.error = Some(e.to_string()),
                }
                self.checking = false;
            }
            SessionEvent::ConnectStarted => self.error = None,
            SessionEvent::Connected(result) => match result {
                Ok(Some(account)) => self.set_account(Some(account)),
                // An empty grant leaves the session as it was.
                Ok(None) => {}
                Err(e) => self.error = Some(e.to_string()),
            },
            SessionEvent::AccountsChanged(accounts) => {
                self.set_account(Account::from_accounts(&accounts))
            }
            SessionEvent::LoggedOut => self.logout(),
        }
    }

    /// Forgets the local session. The extension keeps its authorization;
    /// there is no programmatic disconnect.
    pub fn logout(&mut self) {
        self.connected = false;
        self.account = None;
        self.error = None;
    }

    pub fn view(&self) -> GateView {
        if self.checking {
            GateView::Checking
        } else if !self.connected {
            GateView::Disconnected {
                error: self.error.clone(),
            }
        } else {
            GateView::Connected {
                account: self.account.clone(),
            }
        }
    }

    fn set_account(&mut self, account: Option<Account>) {
        self.connected = account.is_some();
        self.account = account;
    }
}
