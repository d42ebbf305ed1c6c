use std::fmt;

/// An account address as reported by the wallet provider.
///
/// The provider is the source of truth for formatting, so the address is kept
/// verbatim (MetaMask reports lowercase hex).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Account(String);

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Picks the active account out of a provider account list.
    ///
    /// Providers put the selected account first. Blank entries are skipped.
    pub fn from_accounts<S: AsRef<str>>(accounts: &[S]) -> Option<Self> {
        accounts
            .iter()
            .map(|a| a.as_ref().trim())
            .find(|a| !a.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x1234...abcd` style display form.
    pub fn abbreviated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
