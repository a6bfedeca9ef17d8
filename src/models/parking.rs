use serde::{Deserialize, Serialize};

/// Represents a parking lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    /// The unique identifier for the lot.
    pub id: String,
    /// The display name of the lot.
    pub name: String,
    /// The street address of the lot.
    pub address: String,
    /// The latitude of the lot.
    pub latitude: f64,
    /// The longitude of the lot.
    pub longitude: f64,
    /// The number of slots in the lot.
    pub total_slots: i64,
    /// The number of slots currently free.
    pub available_slots: i64,
    /// The hourly price in rupees.
    pub price_per_hour: f64,
    /// Free-form opening hours, e.g. `24/7`.
    pub operating_hours: String,
    /// Amenities such as `CCTV` or `EV Charging`.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// An optional picture of the lot.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the lot accepts bookings.
    pub is_active: bool,
    /// The average review rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// The number of reviews.
    #[serde(default)]
    pub total_reviews: i64,
    /// The timestamp when the lot was created.
    pub created_at: String,
}

/// Optional location filter for lot listings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LotQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search radius in kilometres.
    pub max_distance: Option<f64>,
}

impl LotQuery {
    /// A filter around a point.
    pub fn near(latitude: f64, longitude: f64, max_distance: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            max_distance: Some(max_distance),
        }
    }

    /// Query pairs for the parameters that are set.
    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("max_distance", self.max_distance),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
        .collect()
    }
}

/// The kind of vehicle a slot is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Regular,
    Disabled,
    Electric,
    Compact,
}

impl SlotType {
    /// The wire name of the slot type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Regular => "regular",
            SlotType::Disabled => "disabled",
            SlotType::Electric => "electric",
            SlotType::Compact => "compact",
        }
    }
}

/// The occupancy state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl SlotStatus {
    /// The wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Occupied => "occupied",
            SlotStatus::Reserved => "reserved",
            SlotStatus::Maintenance => "maintenance",
        }
    }
}

/// Represents a single parking slot within a lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSlot {
    pub id: String,
    pub lot_id: String,
    pub slot_number: String,
    pub slot_type: SlotType,
    pub status: SlotStatus,
    pub floor_level: i32,
    /// Absent on the admin update response, which returns `updated_at` instead.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The result of a bulk slot creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkSlotsResult {
    pub message: String,
    pub created_count: i64,
    pub skipped_count: i64,
}
