use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parking::ParkingLot;
use super::vehicle::Vehicle;

/// The lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// The wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// The payment state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

/// Represents a booking of a slot for a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub lot_id: String,
    pub slot_id: String,
    pub vehicle_id: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    /// The total price in rupees.
    pub total_price: f64,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub qr_code: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Populated on listings and single-booking reads.
    #[serde(default)]
    pub parking_lot: Option<ParkingLot>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub receipt: Option<BookingReceipt>,
}

/// Slot details printed on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSlotInfo {
    pub slot_number: String,
    #[serde(default)]
    pub floor_level: Option<i32>,
    #[serde(default)]
    pub slot_type: Option<String>,
}

/// Vehicle details printed on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptVehicleInfo {
    pub license_plate: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// The receipt issued when a booking is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub booking_id: String,
    pub confirmation_number: String,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub user_phone: Option<String>,
    pub parking_lot_name: String,
    pub parking_lot_address: String,
    #[serde(default)]
    pub parking_lot_contact: Option<String>,
    pub slot: ReceiptSlotInfo,
    pub vehicle: ReceiptVehicleInfo,
    pub start_time: String,
    pub end_time: String,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub total_price: f64,
    pub created_at: String,
    #[serde(default)]
    pub qr_code: Option<String>,
}

/// The request payload for creating a booking.
#[derive(Debug, Clone, Serialize)]
pub struct NewBooking {
    pub lot_id: String,
    pub slot_id: String,
    pub vehicle_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// The request payload for changing a booking.
///
/// Used both to extend a booking (`end_time`) and to cancel it (`status`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl BookingUpdate {
    /// An update that cancels the booking.
    pub fn cancel() -> Self {
        Self {
            end_time: None,
            status: Some(BookingStatus::Cancelled),
        }
    }

    /// An update that moves the end of the booking.
    pub fn extend_to(end_time: DateTime<Utc>) -> Self {
        Self {
            end_time: Some(end_time),
            status: None,
        }
    }
}
