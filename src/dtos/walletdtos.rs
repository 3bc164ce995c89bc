use serde::{Deserialize, Serialize};

use crate::models::walletmodels::WalletType;

/// Body of create and update requests. Every field is required; any `id` or
/// `created_at` sent by the client is ignored, both are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRequestDto {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub balance: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletQueryDto {
    pub wallet_type: Option<String>,
}

impl WalletQueryDto {
    /// `Ok(None)` when no filter was given, `Err` carrying the raw value when
    /// it is not a wallet type key.
    pub fn wallet_type(&self) -> Result<Option<WalletType>, String> {
        match self.wallet_type.as_deref() {
            None | Some("") => Ok(None),
            Some(key) => WalletType::from_key(key)
                .map(Some)
                .ok_or_else(|| key.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ignores_client_id_and_timestamp() {
        let body = r#"{
            "id": 99,
            "user_id": 2,
            "user_name": "Chivas",
            "wallet_name": "My Saving",
            "wallet_type": "Savings",
            "balance": 100,
            "created_at": "2020-01-01T00:00:00Z"
        }"#;

        let dto: WalletRequestDto = serde_json::from_str(body).unwrap();
        assert_eq!(dto.user_id, 2);
        assert_eq!(dto.wallet_type, WalletType::Savings);
        assert_eq!(dto.balance, 100.0);
    }

    #[test]
    fn request_requires_every_field() {
        let complete = serde_json::json!({
            "user_id": 2,
            "user_name": "Chivas",
            "wallet_name": "My Saving",
            "wallet_type": "Savings",
            "balance": 100
        });

        for field in ["user_id", "user_name", "wallet_name", "wallet_type", "balance"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);

            let err = serde_json::from_value::<WalletRequestDto>(body).unwrap_err();
            assert!(err.to_string().contains(&format!("missing field `{field}`")));
        }
    }

    #[test]
    fn empty_filter_means_all() {
        let query = WalletQueryDto {
            wallet_type: Some(String::new()),
        };
        assert_eq!(query.wallet_type(), Ok(None));
        assert_eq!(WalletQueryDto::default().wallet_type(), Ok(None));
    }

    #[test]
    fn filter_rejects_unknown_key() {
        let query = WalletQueryDto {
            wallet_type: Some("Crypto Wallet".to_string()),
        };
        assert_eq!(query.wallet_type(), Err("Crypto Wallet".to_string()));
    }
}
