use crate::client::{segment, ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::admin::{AdminUserUpdate, RealtimeStats, SlotUpdate, UserDetails, UserPage, UserQuery};
use crate::models::common::Acknowledgement;
use crate::models::parking::{BulkSlotsResult, ParkingSlot};
use crate::models::user::User;
use crate::validation::forms::{BulkSlotsForm, NewSlotForm, NewUserForm};

/// Admin-only operations. The backend rejects them with 403 for regular users.
impl ApiClient {
    /// Lists users page by page, optionally filtered by role or a search term.
    pub async fn get_all_users(&self, query: &UserQuery) -> Result<UserPage> {
        self.request(
            "/api/admin/users",
            RequestOptions::get().query(query.to_pairs()),
        )
        .await
    }

    /// Fetches a user with their booking totals and vehicles.
    pub async fn get_user_details(&self, user_id: &str) -> Result<UserDetails> {
        self.request(
            &format!("/api/admin/users/{}", segment(user_id)),
            RequestOptions::get(),
        )
        .await
    }

    #[tracing::instrument(skip(self, form), fields(email = %form.email))]
    pub async fn create_user_by_admin(&self, form: &NewUserForm) -> Result<User> {
        self.request("/api/admin/users", RequestOptions::post().json(form)?)
            .await
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_user_by_admin(&self, user_id: &str, update: &AdminUserUpdate) -> Result<User> {
        self.request(
            &format!("/api/admin/users/{}", segment(user_id)),
            RequestOptions::put().json(update)?,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<Acknowledgement> {
        self.request(
            &format!("/api/admin/users/{}", segment(user_id)),
            RequestOptions::delete(),
        )
        .await
    }

    /// Adds one slot to a lot.
    pub async fn create_parking_slot(&self, lot_id: &str, form: &NewSlotForm) -> Result<ParkingSlot> {
        self.request(
            &format!("/api/admin/parking-lots/{}/slots", segment(lot_id)),
            RequestOptions::post().json(form)?,
        )
        .await
    }

    /// Adds a run of numbered slots to a lot. Slot numbers that already exist are skipped.
    pub async fn create_bulk_parking_slots(
        &self,
        lot_id: &str,
        form: &BulkSlotsForm,
    ) -> Result<BulkSlotsResult> {
        self.request(
            &format!("/api/admin/parking-lots/{}/slots/bulk", segment(lot_id)),
            RequestOptions::post().query(form.to_pairs()),
        )
        .await
    }

    pub async fn update_parking_slot(&self, slot_id: &str, update: &SlotUpdate) -> Result<ParkingSlot> {
        self.request(
            &format!("/api/admin/parking-slots/{}", segment(slot_id)),
            RequestOptions::put().json(update)?,
        )
        .await
    }

    pub async fn delete_parking_slot(&self, slot_id: &str) -> Result<Acknowledgement> {
        self.request(
            &format!("/api/admin/parking-slots/{}", segment(slot_id)),
            RequestOptions::delete(),
        )
        .await
    }

    /// A live snapshot of users, lots, slots, bookings and revenue.
    pub async fn get_realtime_stats(&self) -> Result<RealtimeStats> {
        self.request("/api/admin/stats/realtime", RequestOptions::get())
            .await
    }
}
