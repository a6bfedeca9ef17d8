use serde::Deserialize;

/// Platform-wide totals for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub total_revenue: f64,
    pub total_parking_lots: i64,
    pub total_users: i64,
    pub occupancy_rate: f64,
}

/// One day of the booking/revenue series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingAnalytics {
    pub date: String,
    pub bookings: i64,
    pub revenue: f64,
}

/// A short reference to a lot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LotSummary {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Totals for the signed-in user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserStats {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub total_spent: f64,
    #[serde(default)]
    pub favorite_parking_lot: Option<LotSummary>,
}
