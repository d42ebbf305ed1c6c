pub mod use_wallet_gate;

pub use use_wallet_gate::use_wallet_gate;
pub use use_wallet_gate::GateCommand;
pub use use_wallet_gate::WalletGateHandle;
