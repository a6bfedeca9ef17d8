use crate::client::{segment, ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::common::Acknowledgement;
use crate::models::review::Review;
use crate::validation::forms::NewReviewForm;

impl ApiClient {
    pub async fn create_review(&self, form: &NewReviewForm) -> Result<Review> {
        self.request("/api/reviews", RequestOptions::post().json(form)?)
            .await
    }

    /// Lists the reviews left on a lot.
    pub async fn get_lot_reviews(&self, lot_id: &str) -> Result<Vec<Review>> {
        self.request(
            &format!("/api/reviews/lot/{}", segment(lot_id)),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn delete_review(&self, id: &str) -> Result<Acknowledgement> {
        self.request(
            &format!("/api/reviews/{}", segment(id)),
            RequestOptions::delete(),
        )
        .await
    }
}
