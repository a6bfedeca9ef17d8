use serde::{Deserialize, Serialize};

/// How a payment is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Upi,
    Card,
    Netbanking,
}

/// The request payload for a simulated payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    /// Amount in paise.
    pub amount: u64,
    pub currency: String,
    pub payment_method: PaymentMethod,
}

/// The outcome of a simulated payment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}
