use serde::{Deserialize, Serialize};

/// Represents a review left on a parking lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub lot_id: String,
    pub user_id: String,
    pub user_name: String,
    /// A rating between 1 and 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}
