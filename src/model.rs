//! Data transfer types mirroring the flowl backend's JSON payloads.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub plant_count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    /// Emoji shown on cards and headers.
    pub icon: String,
    pub photo_url: Option<String>,
    pub location_id: Option<i64>,
    pub location_name: Option<String>,
    pub watering_interval_days: i64,
    /// Computed by the backend: "ok", "due" or "overdue".
    pub watering_status: String,
    pub last_watered: Option<String>,
    pub next_due: Option<String>,
    pub light_needs: String,
    pub difficulty: Option<String>,
    pub pet_safety: Option<String>,
    pub growth_speed: Option<String>,
    pub soil_type: Option<String>,
    pub soil_moisture: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create payload; absent fields take backend defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPlant {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watering_interval_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_safety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update payload; absent fields stay untouched, inner `None` clears a
/// nullable column.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watering_interval_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_safety: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_speed: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// Event kinds the backend accepts, in the order pickers show them.
pub const EVENT_TYPES: [&str; 5] = ["watered", "fertilized", "repotted", "pruned", "custom"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareEvent {
    pub id: i64,
    pub plant_id: i64,
    pub plant_name: String,
    /// One of "watered", "fertilized", "repotted", "pruned" or "custom".
    pub event_type: String,
    pub notes: Option<String>,
    pub occurred_at: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewCareEvent {
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
}

/// One page of the global care timeline, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareEventsPage {
    pub events: Vec<CareEvent>,
    pub has_more: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub version: String,
    pub repository: String,
    pub license: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub plant_count: i64,
    pub care_event_count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MqttStatus {
    /// "connected", "disconnected" or "disabled".
    pub status: String,
    pub broker: Option<String>,
    pub topic_prefix: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MqttRepairResult {
    pub cleared: i64,
    pub published: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub locations: i64,
    pub plants: i64,
    pub care_events: i64,
    pub photos: i64,
}
