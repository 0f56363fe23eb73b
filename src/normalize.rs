//! Response normalization
//!
//! Converts wire responses into the canonical shapes the session store
//! holds. Total by construction: optional numeric fields degrade to
//! defaults, absent sections stay absent, and nothing here can fail.
//! Extraction and visa info are already server-canonical and pass through
//! untouched; the store only needs to know whether they were present.

use crate::transport::wire;
use crate::trip::{FlightOffer, HotelOffer, TripBundle, TripExtraction, VisaInfo};

/// A chat response with every carried offer fully defined.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub message: String,
    /// None when the server sent no recommendation section this turn;
    /// callers must not collapse this into an empty list.
    pub recommendations: Option<Vec<TripBundle>>,
    pub extraction: Option<TripExtraction>,
    pub visa_info: Option<VisaInfo>,
}

pub fn normalize(raw: wire::ChatResponse) -> NormalizedResponse {
    NormalizedResponse {
        message: raw.message,
        recommendations: raw
            .recommendations
            .map(|bundles| bundles.into_iter().map(normalize_bundle).collect()),
        extraction: raw.extracted_data,
        visa_info: raw.visa_info,
    }
}

fn normalize_bundle(bundle: wire::TripBundle) -> TripBundle {
    TripBundle {
        flight: FlightOffer {
            airline: bundle.flight.airline,
            price: bundle.flight.price,
            departure: bundle.flight.departure,
            arrival: bundle.flight.arrival,
            layovers: bundle.flight.layovers.unwrap_or(0),
            legs: bundle.flight.legs,
            via: bundle.flight.via,
        },
        hotel: HotelOffer {
            name: bundle.hotel.name,
            price_per_night: bundle.hotel.price_per_night,
            rating: bundle.hotel.rating.unwrap_or(0.0),
            distance_km: bundle.hotel.distance_km,
        },
        car_rental: bundle.car_rental,
        total_price: bundle.total_price,
        score: bundle.score,
        reasoning: bundle.reasoning,
    }
}
