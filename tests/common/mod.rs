// Shared fixtures for router-level tests: an in-memory wallet store and
// helpers that push requests through the real router.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;
use wallet_api::{
    config::Config,
    create_router,
    dtos::WalletRequestDto,
    error::StoreError,
    models::walletmodels::{Wallet, WalletType},
    AppState, UserExt, WalletExt,
};

#[derive(Default)]
pub struct MemoryStore {
    wallets: Mutex<Vec<Wallet>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
        MemoryStore {
            wallets: Mutex::new(wallets),
            failure: None,
        }
    }

    /// Every operation fails with a database error carrying `message`.
    pub fn failing(message: &str) -> Self {
        MemoryStore {
            wallets: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn snapshot(&self) -> Vec<Wallet> {
        self.wallets.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Database(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WalletExt for MemoryStore {
    async fn get_wallets(
        &self,
        wallet_type: Option<WalletType>,
    ) -> Result<Vec<Wallet>, StoreError> {
        self.check()?;
        let wallets = self.wallets.lock().unwrap();
        Ok(wallets
            .iter()
            .filter(|w| wallet_type.map_or(true, |t| w.wallet_type == t))
            .cloned()
            .collect())
    }

    async fn create_wallet(
        &self,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError> {
        self.check()?;
        let mut wallets = self.wallets.lock().unwrap();
        let id = wallets.last().map_or(0, |w| w.id) + 1;
        let created = Wallet {
            id,
            user_id: wallet.user_id,
            user_name: wallet.user_name,
            wallet_name: wallet.wallet_name,
            wallet_type: wallet.wallet_type,
            balance: wallet.balance,
            created_at: Utc::now(),
        };
        wallets.push(created.clone());
        Ok(created)
    }

    async fn update_wallet(
        &self,
        wallet_id: i32,
        wallet: WalletRequestDto,
    ) -> Result<Wallet, StoreError> {
        self.check()?;
        let mut wallets = self.wallets.lock().unwrap();
        let existing = wallets
            .iter_mut()
            .find(|w| w.id == wallet_id)
            .ok_or(StoreError::NotFound(wallet_id))?;

        existing.user_id = wallet.user_id;
        existing.user_name = wallet.user_name;
        existing.wallet_name = wallet.wallet_name;
        existing.wallet_type = wallet.wallet_type;
        existing.balance = wallet.balance;
        Ok(existing.clone())
    }

    async fn delete_wallet(
        &self,
        wallet_id: i32,
    ) -> Result<(), StoreError> {
        self.check()?;
        let mut wallets = self.wallets.lock().unwrap();
        let index = wallets
            .iter()
            .position(|w| w.id == wallet_id)
            .ok_or(StoreError::NotFound(wallet_id))?;
        wallets.remove(index);
        Ok(())
    }
}

#[async_trait]
impl UserExt for MemoryStore {
    async fn get_user_wallets(
        &self,
        user_id: i32,
    ) -> Result<Vec<Wallet>, StoreError> {
        self.check()?;
        let wallets = self.wallets.lock().unwrap();
        Ok(wallets.iter().filter(|w| w.user_id == user_id).cloned().collect())
    }
}

pub fn created_at(days_ago: i64) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T08:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
        - Duration::days(days_ago)
}

pub fn wallet(id: i32, user_id: i32, wallet_type: WalletType) -> Wallet {
    Wallet {
        id,
        user_id,
        user_name: "John Doe".to_string(),
        wallet_name: "John's Wallet".to_string(),
        wallet_type,
        balance: 100.0,
        created_at: created_at(i64::from(id)),
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    let config = Config::from_vars(Default::default()).unwrap();
    create_router(Arc::new(AppState::new(config, store)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}
