pub mod walletmodels;
