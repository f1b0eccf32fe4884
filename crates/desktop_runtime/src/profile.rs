//! Profile pane data loading and wallet updates.
//!
//! Each function performs one backend call and maps every outcome to the display-ready value the
//! reducer stores; nothing here touches runtime state.

use leptos::logging;
use platform_host::{
    ApiRequest, BackendApi, BackendEndpoint, GameRecord, TournamentsEnvelope, Transaction,
    TransactionsEnvelope,
};
use serde_json::json;

pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";
pub const NO_GAMES_MESSAGE: &str = "No games played in the last week";
pub const TRANSACTIONS_FAILED_MESSAGE: &str = "Failed to load transactions";
pub const GAMES_FAILED_MESSAGE: &str = "Failed to load games";
pub const GAMES_NETWORK_FAILED_MESSAGE: &str = "Failed to load recent games";
pub const WALLET_UPDATED_MESSAGE: &str = "Wallet address updated successfully!";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Loads the current user's transactions.
pub async fn load_transactions(api: &dyn BackendApi) -> Result<Vec<Transaction>, String> {
    match api.send(ApiRequest::new(BackendEndpoint::Transactions)).await {
        Ok(response) if response.is_ok() => response
            .json::<TransactionsEnvelope>()
            .map(|envelope| envelope.transactions)
            .map_err(|err| {
                logging::error!("Failed to load transactions: {err}");
                TRANSACTIONS_FAILED_MESSAGE.to_string()
            }),
        Ok(response) => {
            logging::warn!("transactions request rejected with status {}", response.status);
            Err(TRANSACTIONS_FAILED_MESSAGE.to_string())
        }
        Err(err) => {
            logging::error!("Failed to load transactions: {err}");
            Err(TRANSACTIONS_FAILED_MESSAGE.to_string())
        }
    }
}

/// Loads the current user's recent games.
pub async fn load_recent_games(api: &dyn BackendApi) -> Result<Vec<GameRecord>, String> {
    match api.send(ApiRequest::new(BackendEndpoint::Tournaments)).await {
        Ok(response) if response.is_ok() => response
            .json::<TournamentsEnvelope>()
            .map(|envelope| envelope.tournaments)
            .map_err(|err| {
                logging::error!("Failed to load games: {err}");
                GAMES_NETWORK_FAILED_MESSAGE.to_string()
            }),
        Ok(response) => {
            logging::error!("Failed to load games, status: {}", response.status);
            Err(GAMES_FAILED_MESSAGE.to_string())
        }
        Err(err) => {
            logging::error!("Failed to load games: {err}");
            Err(GAMES_NETWORK_FAILED_MESSAGE.to_string())
        }
    }
}

/// Stores `address` as the current user's wallet.
pub async fn update_wallet(api: &dyn BackendApi, address: &str) -> Result<(), String> {
    let request = ApiRequest {
        endpoint: BackendEndpoint::Wallet,
        body: Some(json!({ "walletAddress": address })),
    };
    match api.send(request).await {
        Ok(response) if response.is_ok() => Ok(()),
        Ok(response) => Err(format!(
            "Failed to update wallet: {}",
            response.message().unwrap_or("Unknown error")
        )),
        Err(err) => {
            logging::error!("Failed to update wallet: {err}");
            Err(NETWORK_ERROR_MESSAGE.to_string())
        }
    }
}
