use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    dtos::WalletRequestDto,
    error::StoreError,
    models::walletmodels::{Wallet, WalletType},
};

const WALLET_COLUMNS: &str =
    "id, user_id, user_name, wallet_name, wallet_type, balance, created_at";

#[derive(Debug, Clone)]
pub struct DBClient {
    pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

#[async_trait]
pub trait WalletExt {
    /// All wallets when `wallet_type` is `None`, oldest first.
    async fn get_wallets(
        &self,
        wallet_type: Option<WalletType>,
    ) -> Result<Vec<Wallet>, StoreError>;

    async fn create_wallet(
        &self,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError>;

    async fn update_wallet(
        &self,
        wallet_id: i32,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError>;

    async fn delete_wallet(
        &self,
        wallet_id: i32,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait UserExt {
    async fn get_user_wallets(
        &self,
        user_id: i32,
    ) -> Result<Vec<Wallet>, StoreError>;
}

/// Everything the HTTP layer needs from storage.
pub trait WalletStore: WalletExt + UserExt + Send + Sync {}

impl<T> WalletStore for T where T: WalletExt + UserExt + Send + Sync {}

#[async_trait]
impl WalletExt for DBClient {
    async fn get_wallets(
        &self,
        wallet_type: Option<WalletType>,
    ) -> Result<Vec<Wallet>, StoreError> {
        let wallets = match wallet_type {
            Some(wallet_type) => {
                sqlx::query_as::<_, Wallet>(&format!(
                    "SELECT {WALLET_COLUMNS} FROM user_wallet WHERE wallet_type = $1 ORDER BY id"
                ))
                .bind(wallet_type.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Wallet>(&format!(
                    "SELECT {WALLET_COLUMNS} FROM user_wallet ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(wallets)
    }

    async fn create_wallet(
        &self,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError> {
        let created = sqlx::query_as::<_, Wallet>(&format!(
            r#"
            INSERT INTO user_wallet (user_id, user_name, wallet_name, wallet_type, balance, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {WALLET_COLUMNS}
            "#
        ))
        .bind(wallet.user_id)
        .bind(&wallet.user_name)
        .bind(&wallet.wallet_name)
        .bind(wallet.wallet_type.as_str())
        .bind(wallet.balance)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_wallet(
        &self,
        wallet_id: i32,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError> {
        let updated = sqlx::query_as::<_, Wallet>(&format!(
            r#"
            UPDATE user_wallet
            SET user_id = $1, user_name = $2, wallet_name = $3, wallet_type = $4, balance = $5
            WHERE id = $6
            RETURNING {WALLET_COLUMNS}
            "#
        ))
        .bind(wallet.user_id)
        .bind(&wallet.user_name)
        .bind(&wallet.wallet_name)
        .bind(wallet.wallet_type.as_str())
        .bind(wallet.balance)
        .bind(wallet_id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(StoreError::NotFound(wallet_id))
    }

    async fn delete_wallet(
        &self,
        wallet_id: i32,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM user_wallet WHERE id = $1")
            .bind(wallet_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(wallet_id));
        }

        Ok(())
    }
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user_wallets(
        &self,
        user_id: i32,
    ) -> Result<Vec<Wallet>, StoreError> {
        let wallets = sqlx::query_as::<_, Wallet>(&format!(
            "SELECT {WALLET_COLUMNS} FROM user_wallet WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(wallets)
    }
}
