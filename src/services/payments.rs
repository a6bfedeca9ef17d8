use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::payment::{PaymentMethod, PaymentReceipt, PaymentRequest};

impl ApiClient {
    /// Runs a simulated payment.
    ///
    /// # Arguments
    ///
    /// * `amount_paise` - The amount in paise.
    /// * `method` - How the user chose to pay.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PaymentReceipt`.
    #[tracing::instrument(skip(self))]
    pub async fn process_dummy_payment(
        &self,
        amount_paise: u64,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt> {
        let request = PaymentRequest {
            amount: amount_paise,
            currency: "inr".to_string(),
            payment_method: method,
        };

        let receipt: PaymentReceipt = self
            .request(
                "/api/payments/process-dummy-payment",
                RequestOptions::post().json(&request)?,
            )
            .await?;

        tracing::info!("💳 Payment processed: {}", receipt.transaction_id);
        Ok(receipt)
    }
}
