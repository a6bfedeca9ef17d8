use crate::client::{segment, ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::common::Acknowledgement;
use crate::models::parking::{LotQuery, ParkingLot, ParkingSlot, SlotStatus};
use crate::validation::forms::{NewParkingLotForm, ParkingLotUpdateForm};

impl ApiClient {
    /// Lists parking lots, optionally around a point.
    ///
    /// The backend's answer is returned as-is; filtering out inactive lots is
    /// up to the caller.
    pub async fn get_parking_lots(&self, query: LotQuery) -> Result<Vec<ParkingLot>> {
        self.request(
            "/api/parking/lots",
            RequestOptions::get().query(query.to_pairs()),
        )
        .await
    }

    /// Fetches a single lot.
    pub async fn get_parking_lot(&self, id: &str) -> Result<ParkingLot> {
        self.request(
            &format!("/api/parking/lots/{}", segment(id)),
            RequestOptions::get(),
        )
        .await
    }

    /// Creates a lot, along with any slots listed in the form.
    pub async fn create_parking_lot(&self, form: &NewParkingLotForm) -> Result<ParkingLot> {
        self.request("/api/parking/lots", RequestOptions::post().json(form)?)
            .await
    }

    /// Updates the fields set in `form`.
    pub async fn update_parking_lot(
        &self,
        id: &str,
        form: &ParkingLotUpdateForm,
    ) -> Result<ParkingLot> {
        self.request(
            &format!("/api/parking/lots/{}", segment(id)),
            RequestOptions::put().json(form)?,
        )
        .await
    }

    /// Deletes a lot. The backend answers `204 No Content`.
    pub async fn delete_parking_lot(&self, id: &str) -> Result<Acknowledgement> {
        self.request(
            &format!("/api/parking/lots/{}", segment(id)),
            RequestOptions::delete(),
        )
        .await
    }

    /// Lists the slots of a lot, optionally only those in `status`.
    pub async fn get_parking_slots(
        &self,
        lot_id: &str,
        status: Option<SlotStatus>,
    ) -> Result<Vec<ParkingSlot>> {
        let query = status.map(|s| ("status", s.as_str().to_string()));
        self.request(
            &format!("/api/parking/lots/{}/slots", segment(lot_id)),
            RequestOptions::get().query(query),
        )
        .await
    }
}
