pub mod walletdtos;

pub use walletdtos::{WalletQueryDto, WalletRequestDto};
