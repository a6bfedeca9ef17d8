use serde::{Deserialize, Serialize};

use super::user::{Role, User};

/// Paging and filtering for the admin user listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub role: Option<Role>,
    pub search: Option<String>,
}

impl UserQuery {
    /// Query pairs for the parameters that are set.
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// A page of users.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

/// Aggregates shown on the admin user detail view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserActivityStats {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub total_spent: f64,
    pub total_vehicles: i64,
}

/// A vehicle as listed on the admin user detail view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleSummary {
    pub id: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
}

/// A user together with their activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    pub stats: UserActivityStats,
    #[serde(default)]
    pub vehicles: Vec<VehicleSummary>,
}

/// Fields an admin may change on any user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserCounts {
    pub total: i64,
    pub new_today: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LotCounts {
    pub total: i64,
    pub active: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlotCounts {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingCounts {
    pub total: i64,
    pub active: i64,
    pub completed: i64,
    pub today: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenueTotals {
    pub total: f64,
    pub today: f64,
}

/// A recent booking shown in the activity feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    pub user_name: String,
    pub lot_name: String,
    pub status: String,
    pub total_price: f64,
    pub created_at: String,
}

/// A point-in-time snapshot of platform activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RealtimeStats {
    pub users: UserCounts,
    pub parking_lots: LotCounts,
    pub slots: SlotCounts,
    pub bookings: BookingCounts,
    pub revenue: RevenueTotals,
    #[serde(default)]
    pub recent_activities: Vec<RecentActivity>,
    pub last_updated: String,
}

/// Fields an admin may change on a slot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<super::parking::SlotType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<super::parking::SlotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<i32>,
}
