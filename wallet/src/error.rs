use thiserror::Error;

/// Failures surfaced to the user by the wallet gate.
///
/// The `Display` text is exactly what the gate shows; nothing else about the
/// underlying provider error survives into the session.
#[derive(Debug, Clone, PartialEq, Eq, Error, strum::EnumIs)]
pub enum WalletError {
    #[error("MetaMask is not installed.")]
    ProviderMissing,

    #[error("Failed to check MetaMask connection.")]
    ConnectionCheckFailed,

    #[error("User rejected connection.")]
    UserRejected,

    #[error("User rejected connection or error occurred.")]
    ConnectionRequestFailed,
}
