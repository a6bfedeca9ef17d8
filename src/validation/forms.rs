//! Outgoing request payloads.
//!
//! Each form mirrors the constraints the backend enforces, so a caller can
//! reject bad input before a round-trip with `form.validate()`. The client
//! itself never validates: it sends whatever it is given and lets the
//! backend have the final word.

use garde::Validate;
use serde::Serialize;

use crate::models::parking::{SlotStatus, SlotType};
use crate::models::user::Role;

/// Most slots a single bulk request may create.
pub const MAX_BULK_SLOTS: u32 = 100;

/// The request payload for user registration.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterForm {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The request payload for user login.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginForm {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

/// The request payload for an admin creating a user.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewUserForm {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A slot to create, on its own or as part of a new lot.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewSlotForm {
    #[garde(length(min = 1))]
    pub slot_number: String,
    #[garde(skip)]
    pub slot_type: SlotType,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SlotStatus>,
    #[garde(range(min = 1))]
    pub floor_level: i32,
}

/// The request payload for creating a parking lot.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewParkingLotForm {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[garde(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[garde(range(min = 0))]
    pub total_slots: i64,
    #[garde(range(min = 0.0))]
    pub price_per_hour: f64,
    #[garde(length(min = 1))]
    pub operating_hours: String,
    #[garde(skip)]
    pub amenities: Vec<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[garde(dive)]
    pub slots: Vec<NewSlotForm>,
}

/// The request payload for updating a parking lot. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ParkingLotUpdateForm {
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[garde(range(min = -90.0, max = 90.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[garde(range(min = -180.0, max = 180.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[garde(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Parameters for creating a run of numbered slots.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct BulkSlotsForm {
    #[garde(range(min = 1))]
    pub start_number: u32,
    #[garde(range(min = 1, max = 100))]
    pub count: u32,
    #[garde(skip)]
    pub slot_type: SlotType,
    #[garde(range(min = 1))]
    pub floor_level: i32,
}

impl BulkSlotsForm {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_number", self.start_number.to_string()),
            ("count", self.count.to_string()),
            ("slot_type", self.slot_type.as_str().to_string()),
            ("floor_level", self.floor_level.to_string()),
        ]
    }
}

/// The request payload for registering a vehicle.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewVehicleForm {
    #[garde(length(min = 1))]
    pub license_plate: String,
    #[garde(length(min = 1))]
    pub make: String,
    #[garde(length(min = 1))]
    pub model: String,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

/// The request payload for reviewing a lot.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewReviewForm {
    #[garde(length(min = 1))]
    pub lot_id: String,
    #[garde(range(min = 1, max = 5))]
    pub rating: u8,
    #[garde(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot() -> NewParkingLotForm {
        NewParkingLotForm {
            name: "Phoenix Mall Parking".into(),
            address: "LBS Marg, Kurla West, Mumbai".into(),
            latitude: 19.0866,
            longitude: 72.8890,
            total_slots: 2,
            price_per_hour: 40.0,
            operating_hours: "24/7".into(),
            amenities: vec!["CCTV".into()],
            image_url: None,
            slots: vec![NewSlotForm {
                slot_number: "A1".into(),
                slot_type: SlotType::Regular,
                status: None,
                floor_level: 1,
            }],
        }
    }

    #[test]
    fn registration_requires_email_and_a_password() {
        let mut form = RegisterForm {
            email: "a@b.com".into(),
            password: "x".into(),
            full_name: "Asha Rao".into(),
            phone: None,
        };
        assert!(form.validate().is_ok());

        form.email = "not-an-email".into();
        assert!(form.validate().is_err());

        form.email = "a@b.com".into();
        form.password.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn lot_coordinates_are_bounded() {
        assert!(lot().validate().is_ok());

        let mut bad = lot();
        bad.latitude = 91.0;
        assert!(bad.validate().is_err());

        let mut bad_slot = lot();
        bad_slot.slots[0].slot_number.clear();
        assert!(bad_slot.validate().is_err());
    }

    #[test]
    fn partial_lot_update_only_checks_present_fields() {
        assert!(ParkingLotUpdateForm::default().validate().is_ok());

        let update = ParkingLotUpdateForm {
            longitude: Some(-181.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn rating_and_bulk_count_are_bounded() {
        let review = NewReviewForm {
            lot_id: "lot-1".into(),
            rating: 6,
            comment: None,
        };
        assert!(review.validate().is_err());

        let bulk = BulkSlotsForm {
            start_number: 1,
            count: MAX_BULK_SLOTS + 1,
            slot_type: SlotType::Compact,
            floor_level: 1,
        };
        assert!(bulk.validate().is_err());
    }

    #[test]
    fn unset_optional_fields_are_not_serialized() {
        let json = sonic_rs::to_string(&ParkingLotUpdateForm {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"is_active":false}"#);
    }
}
