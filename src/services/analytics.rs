use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::analytics::{BookingAnalytics, DashboardStats, UserStats};

/// The window the booking series covers when the caller has no preference.
pub const DEFAULT_ANALYTICS_DAYS: u32 = 30;

impl ApiClient {
    /// Platform-wide totals. Admin only.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.request("/api/analytics/dashboard", RequestOptions::get())
            .await
    }

    /// Daily bookings and revenue over the last `days` days. Admin only.
    pub async fn get_booking_analytics(&self, days: u32) -> Result<Vec<BookingAnalytics>> {
        self.request(
            "/api/analytics/bookings",
            RequestOptions::get().query([("days", days.to_string())]),
        )
        .await
    }

    /// Totals for the signed-in user.
    pub async fn get_user_stats(&self) -> Result<UserStats> {
        self.request("/api/analytics/user-stats", RequestOptions::get())
            .await
    }
}
