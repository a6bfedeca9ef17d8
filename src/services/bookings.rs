use crate::client::{segment, ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::booking::{Booking, BookingStatus, BookingUpdate, NewBooking};

fn status_query(status: Option<BookingStatus>) -> Option<(&'static str, String)> {
    status.map(|s| ("status", s.as_str().to_string()))
}

impl ApiClient {
    /// Books a slot.
    ///
    /// Each call creates a booking; nothing here guards against a repeated
    /// submission.
    #[tracing::instrument(skip(self, booking), fields(slot_id = %booking.slot_id))]
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        let created: Booking = self
            .request("/api/bookings", RequestOptions::post().json(booking)?)
            .await?;
        tracing::info!("✅ Booking created: {}", created.id);
        Ok(created)
    }

    /// Lists the signed-in user's bookings.
    pub async fn get_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        self.request(
            "/api/bookings",
            RequestOptions::get().query(status_query(status)),
        )
        .await
    }

    /// Lists every booking on the platform. Admin only.
    pub async fn get_all_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        self.request(
            "/api/bookings/all",
            RequestOptions::get().query(status_query(status)),
        )
        .await
    }

    pub async fn get_booking(&self, id: &str) -> Result<Booking> {
        self.request(
            &format!("/api/bookings/{}", segment(id)),
            RequestOptions::get(),
        )
        .await
    }

    /// Extends or cancels a booking, depending on which fields of `update` are set.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_booking(&self, id: &str, update: &BookingUpdate) -> Result<Booking> {
        self.request(
            &format!("/api/bookings/{}", segment(id)),
            RequestOptions::put().json(update)?,
        )
        .await
    }
}
