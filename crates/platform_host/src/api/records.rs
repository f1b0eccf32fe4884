//! Read-only backend records and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Authenticated user as returned by the backend.
pub struct User {
    /// Backend user id.
    #[serde(default)]
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub username: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Linked wallet address, when set.
    #[serde(
        default,
        rename = "walletAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub wallet_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
/// Envelope shared by session-check, login, and register responses.
pub struct AuthEnvelope {
    /// Application-level success flag.
    #[serde(default)]
    pub success: bool,
    /// Optional server message.
    #[serde(default)]
    pub message: Option<String>,
    /// Authenticated user, when present.
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display bucket for a transaction status.
pub enum TransactionStatus {
    /// `completed`
    Completed,
    /// `pending`
    Pending,
    /// Anything else, including a missing status.
    Failed,
}

impl TransactionStatus {
    /// Classifies a raw backend status string.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("completed") => Self::Completed,
            Some("pending") => Self::Pending,
            _ => Self::Failed,
        }
    }

    /// Returns the badge CSS class.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "status-completed",
            Self::Pending => "status-pending",
            Self::Failed => "status-failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Wallet transaction owned by the current user.
pub struct Transaction {
    /// Transaction id.
    #[serde(default)]
    pub id: u64,
    /// Owning user id.
    #[serde(default)]
    pub user_id: u64,
    /// Transaction type label.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Token amount.
    #[serde(default)]
    pub amount: f64,
    /// Raw status string.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: String,
    /// On-chain hash, when settled.
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

impl Transaction {
    /// Returns the classified status.
    pub fn status_kind(&self) -> TransactionStatus {
        TransactionStatus::from_raw(self.status.as_deref())
    }

    /// Returns the type label, defaulting to `Transaction`.
    pub fn type_label(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .unwrap_or("Transaction")
    }

    /// Returns the status label, defaulting to `unknown`.
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|status| !status.is_empty())
            .unwrap_or("unknown")
    }

    /// Returns the first 20 characters of the hash followed by an ellipsis.
    pub fn short_hash(&self) -> Option<String> {
        let hash = self.transaction_hash.as_deref().filter(|h| !h.is_empty())?;
        Some(format!("{}...", hash.chars().take(20).collect::<String>()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One player's placement in a finished game.
pub struct PlayerPlacement {
    /// Player user id.
    #[serde(default)]
    pub user_id: u64,
    /// Player display name.
    #[serde(default)]
    pub username: String,
    /// Final place (1-based).
    #[serde(default)]
    pub place: u32,
    /// Final score.
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Recent game/tournament record.
pub struct GameRecord {
    /// Game id.
    #[serde(default)]
    pub id: u64,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
    /// Player placements.
    #[serde(default)]
    pub players: Vec<PlayerPlacement>,
    /// Optional display name.
    #[serde(default)]
    pub game_name: Option<String>,
    /// Optional fallback name.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional placement label for the current user.
    #[serde(default)]
    pub placement_name: Option<String>,
    /// Optional raw placement (number or string).
    #[serde(default)]
    pub placement: Option<Value>,
}

impl GameRecord {
    /// Returns `gameName`, then `name`, then `Game #<id>`.
    pub fn display_name(&self) -> String {
        [self.game_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Game #{}", self.id))
    }

    /// Returns `placementName`, then `placement`, then `N/A`.
    pub fn placement_label(&self) -> String {
        if let Some(name) = self.placement_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match &self.placement {
            Some(Value::String(raw)) if !raw.is_empty() => raw.clone(),
            Some(Value::Number(number)) if number.as_f64() != Some(0.0) => number.to_string(),
            _ => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
/// `GET /api/transactions` body.
pub struct TransactionsEnvelope {
    /// Transactions, newest first as provided by the backend.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
/// `GET /api/tournaments` body.
pub struct TournamentsEnvelope {
    /// Recent games.
    #[serde(default)]
    pub tournaments: Vec<GameRecord>,
}
