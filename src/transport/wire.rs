//! Wire records for the assistant service
//!
//! These mirror the server's JSON contract exactly, which means numeric
//! fields the canonical types guarantee may be absent here. They exist only
//! at the transport boundary; the normalizer converts them before anything
//! else sees them.

use serde::{Deserialize, Serialize};

use crate::trip::{CarRentalOffer, LegInfo, TripExtraction, VisaInfo};

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body from `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TripBundle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<TripExtraction>,
    /// Top-level echo of the extraction's missing fields. The engine reads
    /// the copy inside `extracted_data`; this one is parsed for contract
    /// completeness only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_info: Option<VisaInfo>,
}

/// Recommendation bundle as the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripBundle {
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_rental: Option<CarRentalOffer>,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub reasoning: String,
}

/// Flight offer as the server sends it; `layovers` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub airline: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layovers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<LegInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

/// Hotel offer as the server sends it; `rating` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOffer {
    pub name: String,
    pub price_per_night: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}
