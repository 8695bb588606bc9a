use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business flow category (till payment, duka payment, ...) that scopes
/// which templates and logos apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyType {
    pub journey_id: String,
    pub journey_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Activation record binding a template to a journey and channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrConfig {
    pub config_id: u32,
    pub journey_id: String,
    pub template_id: u32,
    pub channel_id: u32,
    pub config_desc: String,
    pub is_active: bool,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Logo asset attached to a journey's QR renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoTemplate {
    pub template_id: u32,
    pub journey_id: String,
    pub template_name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
