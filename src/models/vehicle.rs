use serde::{Deserialize, Serialize};

/// Represents a vehicle registered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub color: Option<String>,
    pub vehicle_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
