pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handler;
pub mod models;
pub mod routes;

use std::{fmt, sync::Arc};

pub use config::Config;
pub use db::{DBClient, UserExt, WalletExt, WalletStore};
pub use routes::create_router;

#[derive(Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<dyn WalletStore>,
}

impl AppState {
    pub fn new(env: Config, db_client: Arc<dyn WalletStore>) -> Self {
        AppState { env, db_client }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.env)
            .field("db_client", &"dyn WalletStore")
            .finish()
    }
}
