//! Trip domain types
//!
//! Canonical records for extracted trip parameters, ranked recommendation
//! bundles, and visa guidance. Field names follow the assistant service's
//! wire contract (snake_case); shapes here are post-normalization, so
//! numeric fields the transport may omit are always defined.

use serde::{Deserialize, Serialize};

/// The assistant's latest structured understanding of the trip request.
///
/// Every field is independently unknown until the server fills it in. A new
/// extraction fully replaces the previous one; the server carries known
/// fields forward, the client never merges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripExtraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// ISO date string, e.g. "2024-01-15".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Optional conversational echo from the extraction model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_message: Option<String>,
    /// Names of fields the server still needs before it can search.
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

impl TripExtraction {
    /// True once the server has stopped asking for more fields.
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

/// One leg of a multi-leg flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegInfo {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
}

/// A flight offer within a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub airline: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    /// Always defined post-normalization; 0 means a direct flight.
    pub layovers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<LegInfo>>,
    /// Connecting hub label for one-stop itineraries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

/// A hotel offer within a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOffer {
    pub name: String,
    pub price_per_night: f64,
    /// Always defined post-normalization; 0 means unrated.
    pub rating: f64,
    /// Distance from the city center, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// An optional car rental attached to a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarRentalOffer {
    pub company: String,
    pub car_type: String,
    pub price_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// One ranked recommendation: flight + hotel, optionally a car.
///
/// Bundles arrive as a complete set per response and are replaced
/// wholesale, never merged entry-by-entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripBundle {
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_rental: Option<CarRentalOffer>,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Human-readable justification for the ranking.
    pub reasoning: String,
}

/// Visa requirement for a destination/nationality pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisaInfo {
    pub destination: String,
    pub nationality: String,
    pub visa_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
