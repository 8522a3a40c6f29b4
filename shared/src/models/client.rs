//! Client register models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    /// Dense 1-based display order, recomputed on insert and delete
    pub sr_no: u32,
    pub name: String,
    pub mobile: String,
    pub alternate_mobile: Option<String>,
    pub city_area: Option<String>,
    pub client_type: ClientType,
    /// GSTIN of the client, when registered
    pub gst_no: Option<String>,
    pub opening_balance: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    #[default]
    Retail,
    Wholesale,
    Dealer,
    Other,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Retail => "Retail",
            ClientType::Wholesale => "Wholesale",
            ClientType::Dealer => "Dealer",
            ClientType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for registering a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub mobile: String,
    pub alternate_mobile: Option<String>,
    pub city_area: Option<String>,
    pub client_type: Option<ClientType>,
    pub gst_no: Option<String>,
    pub opening_balance: Option<Decimal>,
    pub notes: Option<String>,
}

/// Fields editable inline in the client table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientField {
    Name,
    Mobile,
    AlternateMobile,
    CityArea,
    GstNo,
    Notes,
    CreatedAt,
    UpdatedAt,
}

impl ClientField {
    /// Whether an edit of this field should re-stamp `updated_at`
    pub fn stamps_updated_at(&self) -> bool {
        !matches!(self, ClientField::CreatedAt | ClientField::UpdatedAt)
    }
}
