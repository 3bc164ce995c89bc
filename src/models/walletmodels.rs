use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for Wallet {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let wallet_type: String = row.try_get("wallet_type")?;
        let wallet_type = WalletType::try_from(wallet_type)
            .map_err(decode_error("wallet_type"))?;

        Ok(Wallet {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            user_name: row.try_get("user_name")?,
            wallet_name: row.try_get("wallet_name")?,
            wallet_type,
            balance: row.try_get("balance")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

// Keeps the conversion message in the error text.
fn decode_error<E>(column: &'static str) -> impl FnOnce(E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |source| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

/// Kind of account a wallet represents.
///
/// Each variant has an external key (what clients send as a filter) and a
/// display string (what lives in the `wallet_type` column and goes out on
/// the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WalletType {
    Savings,
    CreditCard,
    CryptoWallet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wallet type: {0}")]
pub struct UnknownWalletType(pub String);

impl WalletType {
    pub const ALL: [WalletType; 3] = [
        WalletType::Savings,
        WalletType::CreditCard,
        WalletType::CryptoWallet,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WalletType::Savings => "Savings",
            WalletType::CreditCard => "CreditCard",
            WalletType::CryptoWallet => "CryptoWallet",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Savings => "Savings",
            WalletType::CreditCard => "Credit Card",
            WalletType::CryptoWallet => "Crypto Wallet",
        }
    }

    /// Matches only the external keys, the form accepted on list filters.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn from_display(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Bodies and stored rows may carry either form; both normalize to the variant.
impl TryFrom<String> for WalletType {
    type Error = UnknownWalletType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WalletType::from_display(&value)
            .or_else(|| WalletType::from_key(&value))
            .ok_or(UnknownWalletType(value))
    }
}

impl From<WalletType> for String {
    fn from(value: WalletType) -> Self {
        value.as_str().to_string()
    }
}
