use crate::client::{segment, ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::common::Acknowledgement;
use crate::models::vehicle::Vehicle;
use crate::validation::forms::NewVehicleForm;

impl ApiClient {
    pub async fn create_vehicle(&self, form: &NewVehicleForm) -> Result<Vehicle> {
        self.request("/api/vehicles", RequestOptions::post().json(form)?)
            .await
    }

    pub async fn get_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.request("/api/vehicles", RequestOptions::get()).await
    }

    pub async fn get_vehicle(&self, id: &str) -> Result<Vehicle> {
        self.request(
            &format!("/api/vehicles/{}", segment(id)),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn delete_vehicle(&self, id: &str) -> Result<Acknowledgement> {
        self.request(
            &format!("/api/vehicles/{}", segment(id)),
            RequestOptions::delete(),
        )
        .await
    }
}
